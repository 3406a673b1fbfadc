//! Payload returned by the product analysis endpoint.
//!
//! Every field is optional on the wire; the backend is free to omit whole
//! sections. Fields we don't model are kept in `extra` so the raw results
//! view can still show them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_results: Option<VideoResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_results: Option<ShoppingResults>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health_rating: HealthRating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// How healthy the backend thinks an ingredient is.
///
/// Anything other than `Good` or `Moderate` counts as poor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthRating {
    Good,
    Moderate,
    #[default]
    Poor,
    Other(String),
}

impl From<String> for HealthRating {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Good" => HealthRating::Good,
            "Moderate" => HealthRating::Moderate,
            "Poor" => HealthRating::Poor,
            _ => HealthRating::Other(value),
        }
    }
}

impl From<HealthRating> for String {
    fn from(value: HealthRating) -> Self {
        match value {
            HealthRating::Good => "Good".to_owned(),
            HealthRating::Moderate => "Moderate".to_owned(),
            HealthRating::Poor => "Poor".to_owned(),
            HealthRating::Other(other) => other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoResults {
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingResults {
    #[serde(default)]
    pub shopping: Vec<ShoppingItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    #[serde(default, alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}
