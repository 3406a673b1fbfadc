use crate::model::AnalysisResponse;

const DEFAULT_TITLE: &str = "Food Product";

/// Header for the raw results screen.
pub fn title(data: &AnalysisResponse) -> &str {
    data.analysis
        .as_ref()
        .and_then(|analysis| analysis.product_name.as_deref())
        .or_else(|| data.extra.get("productName").and_then(|name| name.as_str()))
        .unwrap_or(DEFAULT_TITLE)
}

/// The full response, pretty printed.
pub fn body(data: &AnalysisResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_through_top_level_name() {
        let data: AnalysisResponse = serde_json::from_str(r#"{"productName": "Crisps"}"#).unwrap();
        assert_eq!(title(&data), "Crisps");
        assert_eq!(title(&AnalysisResponse::default()), "Food Product");
    }

    #[test]
    fn nested_product_name_wins() {
        let data: AnalysisResponse = serde_json::from_str(
            r#"{"productName": "Outer", "analysis": {"productName": "Oat Bar"}}"#,
        )
        .unwrap();
        assert_eq!(title(&data), "Oat Bar");

        let data: AnalysisResponse =
            serde_json::from_str(r#"{"productName": "Outer", "analysis": {}}"#).unwrap();
        assert_eq!(title(&data), "Outer");
    }

    #[test]
    fn body_includes_unknown_fields() {
        let data: AnalysisResponse = serde_json::from_str(r#"{"score": 7}"#).unwrap();
        assert!(body(&data).unwrap().contains("\"score\": 7"));
    }
}
