//! Project records and category filtering

use serde::{Deserialize, Serialize};

/// Project category, matching the `data-filter` values on the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Model,
    Code,
    Article,
}

/// One portfolio entry from the embedded catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: Category,
    /// Kind line shown under the title, e.g. "Deep Learning Model".
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub tech: Vec<String>,
    pub link: String,
}

/// Active grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(Category),
}

impl Filter {
    /// Parse a `data-filter` attribute value. Unknown values yield `None`,
    /// which the grid renders as empty.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Filter::All),
            "model" => Some(Filter::Category(Category::Model)),
            "code" => Some(Filter::Category(Category::Code)),
            "article" => Some(Filter::Category(Category::Article)),
            _ => None,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => record.category == *c,
        }
    }
}

/// The embedded project catalog.
pub fn load_projects() -> Vec<ProjectRecord> {
    serde_json::from_str(include_str!("projects.json")).expect("embedded projects.json is valid")
}

/// Records passing `filter`, in catalog order.
pub fn filter_records<'a>(records: &'a [ProjectRecord], filter: Filter) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let records = load_projects();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].title, "Stock Price Prediction LSTM");
        assert_eq!(records[0].category, Category::Model);
        assert_eq!(records[0].kind, "Deep Learning Model");
        assert_eq!(records[3].tech, vec!["C", "Linux", "Make"]);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(Filter::parse("model"), Some(Filter::Category(Category::Model)));
        assert_eq!(Filter::parse("code"), Some(Filter::Category(Category::Code)));
        assert_eq!(Filter::parse("article"), Some(Filter::Category(Category::Article)));
        assert_eq!(Filter::parse("video"), None);
        assert_eq!(Filter::parse(""), None);
    }

    #[test]
    fn test_filter_records_by_category() {
        let records = load_projects();

        let all = filter_records(&records, Filter::All);
        assert_eq!(all.len(), 4);

        let code = filter_records(&records, Filter::Category(Category::Code));
        assert_eq!(code.len(), 2);
        assert!(code.iter().all(|r| r.category == Category::Code));

        let articles = filter_records(&records, Filter::Category(Category::Article));
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Statistical Genomic Research");
    }
}
