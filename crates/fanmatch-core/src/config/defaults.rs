// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_MODEL: &str = "snunlp/KR-SBERT-V40K-klueNLI-augSTS";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Graph embedding (node2vec) ---
pub const DEFAULT_GRAPH_DIMENSIONS: usize = 64;
pub const DEFAULT_WALK_LENGTH: usize = 10;
pub const DEFAULT_NUM_WALKS: usize = 40;
pub const DEFAULT_WINDOW: usize = 5;
pub const DEFAULT_RETURN_P: f64 = 1.0;
pub const DEFAULT_IN_OUT_Q: f64 = 1.0;
pub const DEFAULT_EPOCHS: usize = 5;
pub const DEFAULT_NEGATIVE_SAMPLES: usize = 5;
pub const DEFAULT_LEARNING_RATE: f64 = 0.025;
pub const DEFAULT_MIN_LEARNING_RATE: f64 = 0.0001;
pub const DEFAULT_SEED: u64 = 42;

// --- Scoring ---
pub const DEFAULT_ALPHA: f64 = 0.7; // semantic
pub const DEFAULT_BETA: f64 = 0.3; // relational
pub const DEFAULT_RELATIONAL_FALLBACK: f64 = 0.5;
pub const DEFAULT_IDENTITY_BASE: f64 = 0.7;
pub const DEFAULT_IDENTITY_SPAN: f64 = 0.6;
pub const DEFAULT_IDENTITY_EXPONENT: f64 = 2.0;
pub const DEFAULT_PARALLEL: bool = true;

// --- Penalty ---
pub const DEFAULT_UNDERDOG_MONEY_THRESHOLD: f64 = 8.0;
pub const DEFAULT_UNDERDOG_MONEY_FACTOR: f64 = 0.4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
