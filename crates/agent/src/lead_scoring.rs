//! Lead Scoring
//!
//! Points are fixed per signal category and awarded once per category, so a
//! score is fully determined by which categories fired. Contact info weighs
//! most, then intent, budget and areas, then property type, timeline and
//! first-time buyer status.
//!
//! Qualification levels sit on top of the score with default thresholds of
//! 30 / 60 / 80, overridable through [`ScoringConfig`].

use serde::{Deserialize, Serialize};

use nestiq_config::ScoringConfig;
use nestiq_core::{ExtractedLeadProfile, LeadIntent, MAX_LEAD_SCORE};

/// Points per signal category
pub mod points {
    /// Buying or selling intent
    pub const INTENT: u32 = 15;
    /// Curiosity without buying or selling language
    pub const EXPLORING: u32 = 5;
    pub const BUDGET: u32 = 15;
    pub const PROPERTY_TYPE: u32 = 10;
    pub const TIMELINE: u32 = 10;
    /// Awarded once, however many areas are named
    pub const AREAS: u32 = 15;
    pub const FIRST_TIME_BUYER: u32 = 10;
    /// Email, phone or name; awarded once
    pub const CONTACT: u32 = 25;
}

/// Lead qualification level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadQualification {
    /// Cold lead - just exploring, low intent
    Cold,
    /// Warm lead - showing interest, gathering information
    Warm,
    /// Hot lead - high intent, ready to act
    Hot,
    /// Qualified lead - ready for a realtor follow-up
    Qualified,
}

impl LeadQualification {
    /// Create from score using default thresholds
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=29 => LeadQualification::Cold,
            30..=59 => LeadQualification::Warm,
            60..=79 => LeadQualification::Hot,
            _ => LeadQualification::Qualified,
        }
    }

    /// Create from score using configured thresholds
    pub fn from_score_with_config(score: u32, config: &ScoringConfig) -> Self {
        let thresholds = &config.qualification_thresholds;
        if score >= thresholds.qualified {
            LeadQualification::Qualified
        } else if score >= thresholds.hot {
            LeadQualification::Hot
        } else if score >= thresholds.warm {
            LeadQualification::Warm
        } else {
            LeadQualification::Cold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadQualification::Cold => "cold",
            LeadQualification::Warm => "warm",
            LeadQualification::Hot => "hot",
            LeadQualification::Qualified => "qualified",
        }
    }
}

impl std::fmt::Display for LeadQualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points contributed by each signal category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub intent: u32,
    pub budget: u32,
    pub property_type: u32,
    pub timeline: u32,
    pub areas: u32,
    pub first_time_buyer: u32,
    pub contact: u32,
}

impl ScoreBreakdown {
    /// Derive the points from the signals present on a profile
    ///
    /// The profile's own `score` is ignored.
    pub fn from_profile(profile: &ExtractedLeadProfile) -> Self {
        let award = |fired: bool, pts: u32| if fired { pts } else { 0 };

        Self {
            intent: match profile.intent {
                Some(LeadIntent::Buying) | Some(LeadIntent::Selling) => points::INTENT,
                Some(LeadIntent::Exploring) => points::EXPLORING,
                None => 0,
            },
            budget: award(profile.budget_range.is_some(), points::BUDGET),
            property_type: award(profile.property_type.is_some(), points::PROPERTY_TYPE),
            timeline: award(profile.timeline.is_some(), points::TIMELINE),
            areas: award(!profile.areas.is_empty(), points::AREAS),
            first_time_buyer: award(profile.is_first_time_buyer(), points::FIRST_TIME_BUYER),
            contact: award(
                profile.contact.as_ref().is_some_and(|c| !c.is_empty()),
                points::CONTACT,
            ),
        }
    }

    /// Sum of all categories before clamping
    pub fn total(&self) -> u32 {
        self.intent
            + self.budget
            + self.property_type
            + self.timeline
            + self.areas
            + self.first_time_buyer
            + self.contact
    }

    /// Final lead score, clamped to 0-100
    pub fn score(&self) -> u32 {
        self.total().min(MAX_LEAD_SCORE)
    }
}

/// Extraction result with score detail and qualification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAssessment {
    pub profile: ExtractedLeadProfile,
    pub breakdown: ScoreBreakdown,
    pub qualification: LeadQualification,
}
