use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Default keyword table. Order is precedence: the first row with a
/// keyword contained in the query wins.
pub const DEFAULT_KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (Category::Money, &["자본", "돈", "부자"]),
    (Category::UnderdogFeel, &["언더독", "기적", "약팀", "낭만"]),
    (Category::Tradition, &["역사", "전통", "명문"]),
    (Category::AttackStyle, &["공격", "화끈"]),
    (Category::StarPower, &["스타", "개인", "선수"]),
];

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Category classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Category when no row matches.
    pub default_category: Category,
    /// Ordered keyword table.
    pub rules: Vec<KeywordRule>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Strength,
            rules: DEFAULT_KEYWORD_TABLE
                .iter()
                .map(|&(category, keywords)| KeywordRule {
                    category,
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }
}
