//! The "about you" onboarding wizard.

use log::{debug, error};

use super::Alert;
use crate::{
    api::Client,
    error::ApiError,
    model::{preferences::PersonalInfo, Preferences, Session},
};

pub const PURPOSES: &[&str] = &[
    "Fitness Tracking",
    "Health Monitoring",
    "Diet/Nutrition Planning",
    "Weight Management",
    "Medical Condition Management",
    "Physical Activity Motivation",
    "Research Purposes",
];

pub const ALLERGIES: &[&str] = &[
    "Nuts",
    "Dairy",
    "Gluten",
    "Seafood",
    "Pollen",
    "Latex",
    "No known allergies",
];

pub const DISEASES: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Asthma",
    "Thyroid Disorder",
    "None",
];

pub const HEALTH_GOALS: &[&str] = &[
    "Gain Weight",
    "Maintain Weight",
    "Weight loss",
    "Improve Muscle Tone",
    "Increase Stamina",
    "Improve Health",
];

pub const DIETARY_PREFERENCES: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Pescatarian",
    "Omnivore",
    "Keto",
    "Paleo",
    "None",
];

const MISSING_PERSONAL_INFO: &str = "Please fill out all personal information fields.";
const SAVED: &str = "Your information has been saved successfully!";
const REJECTED: &str = "Failed to save your information. Please try again.";
const FAILED: &str = "An error occurred while saving your information.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    PersonalInfo,
    Purpose,
    Allergies,
    Diseases,
    Goals,
    Diet,
    Review,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::PersonalInfo,
        Step::Purpose,
        Step::Allergies,
        Step::Diseases,
        Step::Goals,
        Step::Diet,
        Step::Review,
    ];

    fn index(self) -> usize {
        Step::ALL
            .iter()
            .position(|step| *step == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).map(|index| Step::ALL[index])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutYouForm {
    step: Step,
    pub age: String,
    pub gender: String,
    pub height: String,
    /// Free text appended to the allergies when not blank.
    pub other_allergy: String,
    purpose: String,
    allergies: Vec<String>,
    diseases: Vec<String>,
    goals: Vec<String>,
    dietary_preference: String,
}

impl Default for AboutYouForm {
    fn default() -> Self {
        AboutYouForm {
            step: Step::PersonalInfo,
            age: String::new(),
            gender: String::new(),
            height: String::new(),
            other_allergy: String::new(),
            purpose: PURPOSES[0].to_owned(),
            allergies: Vec::new(),
            diseases: Vec::new(),
            goals: Vec::new(),
            dietary_preference: String::new(),
        }
    }
}

/// Wizard navigation
impl AboutYouForm {
    pub fn step(&self) -> Step {
        self.step
    }

    /// Move to the next step. Personal info must be complete to leave the
    /// first step. Stays put on the last step.
    pub fn advance(&mut self) -> Result<Step, Alert> {
        if self.step == Step::PersonalInfo {
            self.validate()?;
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn validate(&self) -> Result<(), Alert> {
        let missing = [&self.age, &self.gender, &self.height]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return Err(Alert::new("Error", MISSING_PERSONAL_INFO));
        }
        Ok(())
    }
}

/// Selections
impl AboutYouForm {
    pub fn select_purpose(&mut self, purpose: &str) {
        self.purpose = purpose.to_owned();
    }

    pub fn select_diet(&mut self, diet: &str) {
        self.dietary_preference = diet.to_owned();
    }

    pub fn toggle_allergy(&mut self, allergy: &str) {
        toggle(&mut self.allergies, allergy);
    }

    pub fn toggle_disease(&mut self, disease: &str) {
        toggle(&mut self.diseases, disease);
    }

    pub fn toggle_goal(&mut self, goal: &str) {
        toggle(&mut self.goals, goal);
    }

    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    pub fn diseases(&self) -> &[String] {
        &self.diseases
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }
}

/// Submission
impl AboutYouForm {
    pub fn payload(&self) -> Preferences {
        let mut allergies = self.allergies.clone();
        let other = self.other_allergy.trim();
        if !other.is_empty() {
            allergies.push(other.to_owned());
        }

        Preferences {
            personal_info: PersonalInfo {
                age: self.age.clone(),
                gender: self.gender.clone(),
                height: self.height.clone(),
            },
            purpose: self.purpose.clone(),
            allergies,
            diseases: self.diseases.clone(),
            health_goals: self.goals.clone(),
            dietary_preference: self.dietary_preference.clone(),
        }
    }

    /// Save the answers. Either way the user gets an alert: `Ok` for
    /// success, `Err` for anything else.
    pub async fn submit(&self, session: Option<&Session>, client: &Client) -> Result<Alert, Alert> {
        self.validate()?;

        let Some(session) = session else {
            debug!("Refusing to save preferences while signed out");
            return Err(Alert::new("Error", FAILED));
        };

        match client.save_preferences(&session.token, &self.payload()).await {
            Ok(()) => Ok(Alert::new("Success", SAVED)),
            Err(err @ ApiError::Status { .. }) => {
                error!("Preferences rejected: {}", err);
                Err(Alert::new("Error", REJECTED))
            }
            Err(err) => {
                error!("Error saving preferences: {}", err);
                Err(Alert::new("Error", FAILED))
            }
        }
    }
}

fn toggle(selection: &mut Vec<String>, item: &str) {
    match selection.iter().position(|selected| selected == item) {
        Some(index) => {
            selection.remove(index);
        }
        None => selection.push(item.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AboutYouForm {
        AboutYouForm {
            age: "29".to_owned(),
            gender: "Female".to_owned(),
            height: "168".to_owned(),
            ..AboutYouForm::default()
        }
    }

    #[test]
    fn cannot_leave_first_step_without_personal_info() {
        let mut form = AboutYouForm {
            age: "29".to_owned(),
            height: "  ".to_owned(),
            ..AboutYouForm::default()
        };
        let alert = form.advance().unwrap_err();
        assert_eq!(alert.message, "Please fill out all personal information fields.");
        assert_eq!(form.step(), Step::PersonalInfo);
    }

    #[test]
    fn walks_every_step_and_back() {
        let mut form = filled();
        for expected in &Step::ALL[1..] {
            assert_eq!(form.advance().unwrap(), *expected);
        }
        assert_eq!(form.advance().unwrap(), Step::Review);

        for expected in Step::ALL[..6].iter().rev() {
            assert_eq!(form.back(), *expected);
        }
        assert_eq!(form.back(), Step::PersonalInfo);
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut form = filled();
        form.toggle_allergy("Nuts");
        form.toggle_allergy("Dairy");
        form.toggle_allergy("Nuts");
        assert_eq!(form.allergies(), ["Dairy"]);
    }

    #[test]
    fn payload_appends_other_allergy_only_when_given() {
        let mut form = filled();
        form.toggle_allergy("Gluten");
        assert_eq!(form.payload().allergies, vec!["Gluten"]);

        form.other_allergy = " Kiwi ".to_owned();
        form.toggle_goal("Increase Stamina");
        form.select_diet("Vegan");

        let payload = form.payload();
        assert_eq!(payload.allergies, vec!["Gluten", "Kiwi"]);
        assert_eq!(payload.purpose, "Fitness Tracking");
        assert_eq!(payload.health_goals, vec!["Increase Stamina"]);
        assert_eq!(payload.dietary_preference, "Vegan");
    }
}
