use serde::{Deserialize, Serialize};

/// Body of the preferences endpoint, filled in by the onboarding wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub personal_info: PersonalInfo,
    pub purpose: String,
    pub allergies: Vec<String>,
    pub diseases: Vec<String>,
    pub health_goals: Vec<String>,
    pub dietary_preference: String,
}

/// Kept as the strings the user typed; the backend does its own parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub age: String,
    pub gender: String,
    pub height: String,
}
