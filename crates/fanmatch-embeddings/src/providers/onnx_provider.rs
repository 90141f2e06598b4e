//! Local sentence-embedding model via ONNX Runtime (`ort` v2).
//!
//! Batches are right-padded into one tensor per run. Token embeddings are
//! mean pooled over each row's unpadded length and L2 normalised.
//! Tokenisation is a hashed word vocabulary framed by `[CLS]`/`[SEP]`.

use std::fmt::Display;
use std::path::Path;
use std::sync::Mutex;

use fanmatch_core::errors::{EmbeddingError, FanmatchResult};
use fanmatch_core::traits::IEmbeddingProvider;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use crate::similarity::l2_normalize;

const CLS_TOKEN: u32 = 101;
const SEP_TOKEN: u32 = 102;
const HASHED_VOCAB: u32 = 30_000;
const INTRA_THREADS: usize = 2;

pub struct OnnxProvider {
    // run() takes &mut Session.
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Open the model file and build an inference session.
    pub fn load(model_path: &str, dimensions: usize) -> FanmatchResult<Self> {
        let path = Path::new(model_path);
        if !path.is_file() {
            return Err(load_error(model_path, "model file not found").into());
        }

        let session = Session::builder()
            .map_err(|e| load_error(model_path, e))?
            .with_intra_threads(INTRA_THREADS)
            .map_err(|e| load_error(model_path, e))?
            .commit_from_file(path)
            .map_err(|e| load_error(model_path, e))?;

        let model_name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map_or_else(|| "onnx".to_string(), str::to_string);
        debug!(model = %model_name, dimensions, "sentence model session ready");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    /// Run a padded batch through the session and pool one vector per text.
    fn encode_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let tokens: Vec<Vec<u32>> = texts.iter().map(|t| tokenize(t)).collect();
        let lengths: Vec<usize> = tokens.iter().map(Vec::len).collect();
        let (ids, mask, width) = pad(&tokens);
        let shape = vec![tokens.len() as i64, width as i64];

        let ids = Tensor::from_array((shape.clone(), ids)).map_err(|e| inference_error("input_ids", e))?;
        let mask = Tensor::from_array((shape, mask)).map_err(|e| inference_error("attention_mask", e))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_error("session lock", e))?;
        let outputs = session
            .run(ort::inputs![ids, mask])
            .map_err(|e| inference_error("run", e))?;
        let (_, first) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_error("outputs", "model produced no tensors"))?;
        let (dims, data) = first
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_error("extract", e))?;
        let dims: Vec<usize> = dims.iter().map(|&d| d as usize).collect();

        let mut vectors = pool(&dims, data, &lengths)?;
        for vector in &mut vectors {
            l2_normalize(vector);
            vector.resize(self.dimensions, 0.0);
        }
        Ok(vectors)
    }
}

/// Right-pad token rows with id 0 to the longest row. Returns flat ids, the
/// matching attention mask, and the padded width.
fn pad(rows: &[Vec<u32>]) -> (Vec<i64>, Vec<i64>, usize) {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut ids = Vec::with_capacity(rows.len() * width);
    let mut mask = Vec::with_capacity(rows.len() * width);
    for row in rows {
        ids.extend(row.iter().map(|&id| i64::from(id)));
        mask.extend(std::iter::repeat(1i64).take(row.len()));
        ids.extend(std::iter::repeat(0i64).take(width - row.len()));
        mask.extend(std::iter::repeat(0i64).take(width - row.len()));
    }
    (ids, mask, width)
}

/// One vector per row. `[batch, seq, hidden]` is mean pooled over each row's
/// unpadded length; `[batch, hidden]` is already pooled.
fn pool(dims: &[usize], data: &[f32], lengths: &[usize]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
    let batch = lengths.len();
    match *dims {
        [rows, seq, hidden] if rows == batch && data.len() >= rows * seq * hidden => Ok(lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                let tokens = len.min(seq);
                let start = row * seq * hidden;
                let mut sum = vec![0.0f32; hidden];
                for token in data[start..start + tokens * hidden].chunks_exact(hidden.max(1)) {
                    for (acc, x) in sum.iter_mut().zip(token) {
                        *acc += x;
                    }
                }
                let n = tokens.max(1) as f32;
                sum.into_iter().map(|x| x / n).collect()
            })
            .collect()),
        [rows, hidden] if rows == batch && data.len() >= rows * hidden => Ok(data
            .chunks_exact(hidden.max(1))
            .take(rows)
            .map(<[f32]>::to_vec)
            .collect()),
        _ => Err(inference_error(
            "pool",
            format!("unsupported output shape {dims:?} for {batch} inputs"),
        )),
    }
}

/// Lowercased words hashed (FNV-1a, 32-bit) into `1..HASHED_VOCAB`.
fn tokenize(text: &str) -> Vec<u32> {
    let words = text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(|w| {
            let hash = w
                .to_lowercase()
                .bytes()
                .fold(0x811c_9dc5u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
            1 + hash % (HASHED_VOCAB - 1)
        });
    std::iter::once(CLS_TOKEN)
        .chain(words)
        .chain(std::iter::once(SEP_TOKEN))
        .collect()
}

fn load_error(path: &str, reason: impl Display) -> EmbeddingError {
    EmbeddingError::ModelLoadFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn inference_error(stage: &str, reason: impl Display) -> EmbeddingError {
    EmbeddingError::InferenceFailed {
        reason: format!("{stage}: {reason}"),
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> FanmatchResult<Vec<f32>> {
        self.encode_batch(&[text.to_string()])?
            .pop()
            .ok_or_else(|| inference_error("pool", "model returned no vector").into())
    }

    fn embed_batch(&self, texts: &[String]) -> FanmatchResult<Vec<Vec<f32>>> {
        self.encode_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_fails_to_load() {
        let err = OnnxProvider::load("/nonexistent/kr-sbert.onnx", 768)
            .err()
            .unwrap();
        assert!(err.to_string().contains("model file not found"));
    }

    #[test]
    fn tokens_are_framed() {
        let ids = tokenize("패스 위주의 축구");
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], CLS_TOKEN);
        assert_eq!(ids[4], SEP_TOKEN);
        assert!(ids[1..4].iter().all(|&id| (1..HASHED_VOCAB).contains(&id)));
        assert_eq!(tokenize(""), vec![CLS_TOKEN, SEP_TOKEN]);
    }

    #[test]
    fn tokenize_ignores_case_and_punctuation() {
        assert_eq!(tokenize("Pass, pass!"), tokenize("pass pass"));
    }

    #[test]
    fn pool_averages_tokens() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pool(&[1, 2, 2], &data, &[2]).unwrap(), vec![vec![2.0, 3.0]]);
        assert_eq!(pool(&[1, 2], &data, &[2]).unwrap(), vec![vec![1.0, 2.0]]);
        assert_eq!(
            pool(&[2, 2], &data, &[2, 2]).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert!(pool(&[4], &data, &[1]).is_err());
    }

    #[test]
    fn batch_rows_pad_to_longest() {
        let rows = vec![tokenize("패스 축구"), tokenize("")];
        let (ids, mask, width) = pad(&rows);
        assert_eq!(width, 4);
        assert_eq!(ids.len(), 8);
        assert_eq!(&ids[4..], &[i64::from(CLS_TOKEN), i64::from(SEP_TOKEN), 0, 0]);
        assert_eq!(mask, vec![1, 1, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn pool_skips_padding_positions() {
        // Two rows padded to three positions, hidden width 1.
        let data = [1.0, 2.0, 100.0, 4.0, 100.0, 100.0];
        let pooled = pool(&[2, 3, 1], &data, &[2, 1]).unwrap();
        assert_eq!(pooled, vec![vec![1.5], vec![4.0]]);
    }

    #[test]
    fn pool_rejects_batch_size_mismatch() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!(pool(&[1, 2, 2], &data, &[2, 2]).is_err());
        assert!(pool(&[2, 2, 2], &data, &[2, 2]).is_err());
    }
}
