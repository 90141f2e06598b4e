//! Entity corpus: wire records and the loaded, name-indexed collection.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::entity::{Entity, TraitScores};
use crate::errors::{CorpusError, FanmatchResult};

/// One entity as it appears in corpus JSON.
///
/// `style_tags` and `scores` may be absent. Score keys that are not a known
/// category, or values that are not numbers, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, serde_json::Value>,
}

impl EntityRecord {
    /// Convert into an [`Entity`], substituting defaults for partial data.
    pub fn into_entity(self, position: usize) -> Result<Entity, CorpusError> {
        let name = match self.team_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(CorpusError::MissingName { position }),
        };

        let mut scores = TraitScores::new();
        for (key, value) in &self.scores {
            if let (Some(category), Some(score)) = (Category::from_str_name(key), value.as_f64()) {
                scores.set(category, score);
            }
        }

        Ok(Entity::new(name, self.style_tags, scores))
    }
}

/// The loaded corpus. Preserves input order; names are unique.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entities: Vec<Entity>,
    by_name: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from entities, rejecting duplicate names.
    pub fn from_entities(entities: Vec<Entity>) -> FanmatchResult<Self> {
        let mut by_name = HashMap::with_capacity(entities.len());
        for (i, entity) in entities.iter().enumerate() {
            if by_name.insert(entity.name.clone(), i).is_some() {
                return Err(CorpusError::DuplicateName {
                    name: entity.name.clone(),
                }
                .into());
            }
        }
        Ok(Self { entities, by_name })
    }

    /// Build a corpus from wire records.
    pub fn from_records(records: Vec<EntityRecord>) -> FanmatchResult<Self> {
        let entities = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_entity(i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entities(entities)
    }

    /// Parse JSON holding either one record or an array of records.
    pub fn from_json_str(json: &str) -> FanmatchResult<Self> {
        Self::from_records(parse_records(json)?)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&i| &self.entities[i])
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Parse JSON holding either one record or an array of records.
pub fn parse_records(json: &str) -> Result<Vec<EntityRecord>, CorpusError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<EntityRecord>),
        One(EntityRecord),
    }

    let parsed: OneOrMany =
        serde_json::from_str(json).map_err(|e| CorpusError::ParseFailed {
            source_name: "json".to_string(),
            reason: e.to_string(),
        })?;
    Ok(match parsed {
        OneOrMany::Many(records) => records,
        OneOrMany::One(record) => vec![record],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FanmatchError;

    #[test]
    fn partial_record_gets_defaults() {
        let corpus = Corpus::from_json_str(r#"[{"team_name": "브라이튼"}]"#).unwrap();
        let e = corpus.get("브라이튼").unwrap();
        assert!(e.style_tags.is_empty());
        for cat in Category::ALL {
            assert_eq!(e.scores.get(cat), 5.0);
        }
    }

    #[test]
    fn single_object_is_accepted() {
        let corpus = Corpus::from_json_str(
            r#"{"team_name": "첼시", "style_tags": ["자본"], "scores": {"money": 9}}"#,
        )
        .unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("첼시").unwrap().scores.get(Category::Money), 9.0);
    }

    #[test]
    fn unknown_and_non_numeric_scores_are_ignored() {
        let corpus = Corpus::from_json_str(
            r#"[{"team_name": "a", "scores": {"fan_culture": 8, "money": "high", "tradition": 7.5}}]"#,
        )
        .unwrap();
        let e = corpus.get("a").unwrap();
        assert!(!e.scores.is_rated(Category::Money));
        assert_eq!(e.scores.get(Category::Tradition), 7.5);
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = Corpus::from_json_str(r#"[{"team_name": "a"}, {"style_tags": []}]"#).unwrap_err();
        assert!(matches!(
            err,
            FanmatchError::CorpusError(CorpusError::MissingName { position: 1 })
        ));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err =
            Corpus::from_json_str(r#"[{"team_name": "a"}, {"team_name": "a"}]"#).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn order_is_preserved() {
        let corpus = Corpus::from_json_str(
            r#"[{"team_name": "c"}, {"team_name": "a"}, {"team_name": "b"}]"#,
        )
        .unwrap();
        let names: Vec<&str> = corpus.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
