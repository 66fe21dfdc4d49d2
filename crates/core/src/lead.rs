//! Lead profile types produced by signal extraction
//!
//! The profile serializes in the camelCase shape the chat backend stores on
//! a conversation: optional fields are omitted when absent, so a transcript
//! with no signals serializes as `{"score":0}`.

use serde::{Deserialize, Serialize};

/// Highest lead score
pub const MAX_LEAD_SCORE: u32 = 100;

/// What the visitor is trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadIntent {
    Buying,
    Selling,
    /// Curious but no buying or selling language
    Exploring,
}

impl LeadIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadIntent::Buying => "buying",
            LeadIntent::Selling => "selling",
            LeadIntent::Exploring => "exploring",
        }
    }
}

impl std::fmt::Display for LeadIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of property mentioned by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "condo")]
    Condo,
    #[serde(rename = "townhouse")]
    Townhouse,
    #[serde(rename = "detached house")]
    DetachedHouse,
    #[serde(rename = "semi-detached")]
    SemiDetached,
    #[serde(rename = "house")]
    House,
    #[serde(rename = "land")]
    Land,
    #[serde(rename = "multi-family/investment")]
    MultiFamily,
    #[serde(rename = "penthouse")]
    Penthouse,
    #[serde(rename = "loft")]
    Loft,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::DetachedHouse => "detached house",
            PropertyType::SemiDetached => "semi-detached",
            PropertyType::House => "house",
            PropertyType::Land => "land",
            PropertyType::MultiFamily => "multi-family/investment",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Loft => "loft",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency bucket, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "Immediately")]
    Immediately,
    #[serde(rename = "1-2 months")]
    OneToTwoMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2 years")]
    OneToTwoYears,
    #[serde(rename = "No rush / exploring")]
    NoRush,
    /// Catch-all for "soon" without a concrete window
    #[serde(rename = "Soon")]
    Soon,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Immediately => "Immediately",
            Timeline::OneToTwoMonths => "1-2 months",
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixToTwelveMonths => "6-12 months",
            Timeline::OneToTwoYears => "1-2 years",
            Timeline::NoRush => "No rush / exploring",
            Timeline::Soon => "Soon",
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details the visitor volunteered, verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactDetails {
    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Scored lead profile extracted from a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLeadProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<LeadIntent>,
    /// Verbatim budget phrase, e.g. `$900k` or `500k to 800k`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    /// Candidate place names in order of first discovery, no duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<String>,
    /// Only ever `Some(true)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_time_buyer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    /// Lead score (0-100)
    pub score: u32,
}

impl ExtractedLeadProfile {
    /// Check if no signal fired
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_first_time_buyer(&self) -> bool {
        self.is_first_time_buyer.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_serializes_score_only() {
        let profile = ExtractedLeadProfile::default();
        assert!(profile.is_empty());
        assert_eq!(serde_json::to_string(&profile).unwrap(), r#"{"score":0}"#);
    }

    #[test]
    fn test_profile_field_names() {
        let profile = ExtractedLeadProfile {
            intent: Some(LeadIntent::Buying),
            budget_range: Some("$900k".to_string()),
            property_type: Some(PropertyType::MultiFamily),
            timeline: Some(Timeline::NoRush),
            areas: vec!["Kitsilano".to_string()],
            is_first_time_buyer: Some(true),
            contact: None,
            score: 75,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["intent"], "buying");
        assert_eq!(value["budgetRange"], "$900k");
        assert_eq!(value["propertyType"], "multi-family/investment");
        assert_eq!(value["timeline"], "No rush / exploring");
        assert_eq!(value["areas"][0], "Kitsilano");
        assert_eq!(value["isFirstTimeBuyer"], true);
        assert!(value.get("contact").is_none());
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_string(&PropertyType::SemiDetached).unwrap();
        assert_eq!(json, format!("\"{}\"", PropertyType::SemiDetached));
        let json = serde_json::to_string(&Timeline::OneToTwoYears).unwrap();
        assert_eq!(json, format!("\"{}\"", Timeline::OneToTwoYears));
    }
}
