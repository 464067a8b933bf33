use serde::Deserialize;
use serde_json::Value;

use crate::fdc::SearchOptions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    // Kept untyped so a non-string query becomes "Missing query", not a parse error.
    #[serde(default)]
    pub query: Option<Value>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl SearchRequest {
    /// Options for the provider, or `None` when the query is missing, empty or not a string.
    pub fn into_options(self) -> Option<SearchOptions> {
        let query = match self.query {
            Some(Value::String(q)) if !q.is_empty() => q,
            _ => return None,
        };
        let mut opts = SearchOptions::new(query);
        if let Some(size) = self.page_size {
            opts.page_size = size;
        }
        if let Some(number) = self.page_number {
            opts.page_number = number;
        }
        Some(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: Value) -> SearchRequest {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn defaults_page_options() {
        let opts = parse(json!({ "query": "egg" })).into_options().unwrap();
        assert_eq!(opts.query, "egg");
        assert_eq!(opts.page_size, 25);
        assert_eq!(opts.page_number, 1);
    }

    #[test]
    fn keeps_explicit_page_options() {
        let opts = parse(json!({ "query": "rice", "pageSize": 5, "pageNumber": 3 }))
            .into_options()
            .unwrap();
        assert_eq!((opts.page_size, opts.page_number), (5, 3));
    }

    #[test]
    fn rejects_missing_empty_and_non_string_queries() {
        assert!(parse(json!({})).into_options().is_none());
        assert!(parse(json!({ "query": "" })).into_options().is_none());
        assert!(parse(json!({ "query": 42 })).into_options().is_none());
        assert!(parse(json!({ "query": null })).into_options().is_none());
    }
}
