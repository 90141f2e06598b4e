//! Table-driven query classification.

use fanmatch_core::config::ClassifierConfig;
use fanmatch_core::Category;

/// Maps a query to the category it emphasises.
///
/// Rows are tried in table order; the first row with any keyword contained
/// in the lowercased query wins.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<(Category, Vec<String>)>,
    default_category: Category,
}

impl CategoryClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                let keywords = rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    // An empty keyword would match every query.
                    .filter(|k| !k.is_empty())
                    .collect();
                (rule.category, keywords)
            })
            .collect();

        Self {
            rules,
            default_category: config.default_category,
        }
    }

    pub fn classify(&self, query: &str) -> Category {
        self.matched_rule(query)
            .map(|(category, _)| category)
            .unwrap_or(self.default_category)
    }

    /// The winning category and the keyword that selected it.
    pub fn matched_rule(&self, query: &str) -> Option<(Category, &str)> {
        let query = query.to_lowercase();
        self.rules.iter().find_map(|(category, keywords)| {
            keywords
                .iter()
                .find(|k| query.contains(k.as_str()))
                .map(|k| (*category, k.as_str()))
        })
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanmatch_core::config::KeywordRule;

    #[test]
    fn default_table_rows() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("자본력이 강한 팀"), Category::Money);
        assert_eq!(c.classify("약팀의 반란"), Category::UnderdogFeel);
        assert_eq!(c.classify("명문 구단"), Category::Tradition);
        assert_eq!(c.classify("화끈한 축구"), Category::AttackStyle);
        assert_eq!(c.classify("개인기 좋은 팀"), Category::StarPower);
        assert_eq!(c.classify("성적 좋은 팀"), Category::Strength);
    }

    #[test]
    fn money_wins_over_underdog() {
        let c = CategoryClassifier::default();
        assert_eq!(
            c.classify("돈으로 우승을 사는 팀은 싫어. 낭만 있는 언더독의 기적"),
            Category::Money
        );
    }

    #[test]
    fn substring_matches_inside_words() {
        // "역사적" contains "역사".
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("역사적 깊이가 느껴지는 구단"), Category::Tradition);
        assert_eq!(c.matched_rule("역사적 깊이"), Some((Category::Tradition, "역사")));
    }

    #[test]
    fn empty_query_is_default() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify(""), Category::Strength);
        assert_eq!(c.matched_rule(""), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = CategoryClassifier::new(&ClassifierConfig {
            default_category: Category::Strength,
            rules: vec![KeywordRule {
                category: Category::StarPower,
                keywords: vec!["Galacticos".into()],
            }],
        });
        assert_eq!(c.classify("I love GALACTICOS"), Category::StarPower);
    }

    #[test]
    fn custom_table_and_default() {
        let c = CategoryClassifier::new(&ClassifierConfig {
            default_category: Category::Tradition,
            rules: vec![
                KeywordRule {
                    category: Category::AttackStyle,
                    keywords: vec!["goal".into(), "".into()],
                },
                KeywordRule {
                    category: Category::Money,
                    keywords: vec!["goal".into()],
                },
            ],
        });
        assert_eq!(c.classify("many goals"), Category::AttackStyle);
        assert_eq!(c.classify("defence"), Category::Tradition);
    }
}
