//! Lead Signal Extraction
//!
//! Scores a chat transcript by running a fixed sequence of pattern detectors
//! over the text of every visitor message:
//!
//! 1. Intent (buying / selling / exploring)
//! 2. Budget phrase
//! 3. Property type
//! 4. Timeline
//! 5. Area mentions
//! 6. First-time buyer
//! 7. Contact info (email, phone, name introduction)
//!
//! Each detector is first-match-wins over its ordered pattern table and
//! contributes a fixed number of points (see [`crate::lead_scoring::points`]).
//! Extraction is deterministic and never fails; a transcript without visitor
//! text yields the empty zero-score profile.

mod patterns;

use nestiq_config::ScoringConfig;
use nestiq_core::{
    user_text, ContactDetails, ConversationMessage, ExtractedLeadProfile, LeadIntent,
    PropertyType, Timeline,
};

use crate::lead_scoring::{LeadAssessment, LeadQualification, ScoreBreakdown};
use patterns::{
    AREA_PATTERNS, AREA_STOPLIST, BUDGET_PATTERNS, BUYING_PATTERNS, EMAIL_PATTERN,
    EXPLORING_PATTERNS, FIRST_TIME_PATTERNS, NAME_PATTERNS, PHONE_PATTERN,
    PROPERTY_TYPE_PATTERNS, SELLING_PATTERNS, TIMELINE_PATTERNS,
};

/// Extract a scored lead profile from a transcript
pub fn extract(messages: &[ConversationMessage]) -> ExtractedLeadProfile {
    extract_with_breakdown(messages).0
}

fn extract_with_breakdown(messages: &[ConversationMessage]) -> (ExtractedLeadProfile, ScoreBreakdown) {
    let Some(text) = user_text(messages) else {
        return (ExtractedLeadProfile::default(), ScoreBreakdown::default());
    };

    let mut profile = ExtractedLeadProfile {
        intent: detect_intent(&text),
        budget_range: detect_budget(&text),
        property_type: detect_property_type(&text),
        timeline: detect_timeline(&text),
        areas: detect_areas(&text),
        is_first_time_buyer: detect_first_time_buyer(&text).then_some(true),
        contact: detect_contact(&text),
        score: 0,
    };

    let breakdown = ScoreBreakdown::from_profile(&profile);
    profile.score = breakdown.score();

    tracing::debug!(
        intent = ?profile.intent,
        budget = profile.budget_range.is_some(),
        property_type = ?profile.property_type,
        timeline = ?profile.timeline,
        areas = profile.areas.len(),
        first_time_buyer = profile.is_first_time_buyer(),
        contact = profile.contact.is_some(),
        score = profile.score,
        "Lead signals extracted"
    );

    (profile, breakdown)
}

/// Lead signal extractor with configurable qualification thresholds
///
/// Signal detection and points do not depend on the configuration; only the
/// qualification level assigned by [`assess`](Self::assess) does.
#[derive(Debug, Clone, Default)]
pub struct LeadSignalExtractor {
    scoring: ScoringConfig,
}

impl LeadSignalExtractor {
    /// Create an extractor with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with configured thresholds
    pub fn with_config(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Extract a scored lead profile
    pub fn extract(&self, messages: &[ConversationMessage]) -> ExtractedLeadProfile {
        extract(messages)
    }

    /// Extract and qualify a lead
    pub fn assess(&self, messages: &[ConversationMessage]) -> LeadAssessment {
        let (profile, breakdown) = extract_with_breakdown(messages);
        let qualification = LeadQualification::from_score_with_config(profile.score, &self.scoring);

        tracing::trace!(score = profile.score, %qualification, "Lead assessed");

        LeadAssessment {
            profile,
            breakdown,
            qualification,
        }
    }
}

/// Buying wins when both batteries fire; curiosity only counts on its own
fn detect_intent(text: &str) -> Option<LeadIntent> {
    let buying = BUYING_PATTERNS.iter().any(|p| p.is_match(text));
    let selling = SELLING_PATTERNS.iter().any(|p| p.is_match(text));

    if buying {
        Some(LeadIntent::Buying)
    } else if selling {
        Some(LeadIntent::Selling)
    } else if EXPLORING_PATTERNS.iter().any(|p| p.is_match(text)) {
        Some(LeadIntent::Exploring)
    } else {
        None
    }
}

fn detect_budget(text: &str) -> Option<String> {
    BUDGET_PATTERNS
        .iter()
        .find_map(|p| p.find(text))
        .map(|m| m.as_str().trim().to_string())
}

fn detect_property_type(text: &str) -> Option<PropertyType> {
    PROPERTY_TYPE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, property_type)| *property_type)
}

fn detect_timeline(text: &str) -> Option<Timeline> {
    TIMELINE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, timeline)| *timeline)
}

/// Every match of both area families, deduplicated in discovery order
fn detect_areas(text: &str) -> Vec<String> {
    let mut areas: Vec<String> = Vec::new();

    for pattern in AREA_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(candidate) = caps.get(1).map(|m| m.as_str().trim()) else {
                continue;
            };
            if AREA_STOPLIST.contains(&candidate) || candidate.chars().count() <= 2 {
                continue;
            }
            if !areas.iter().any(|a| a == candidate) {
                areas.push(candidate.to_string());
            }
        }
    }

    areas
}

fn detect_first_time_buyer(text: &str) -> bool {
    FIRST_TIME_PATTERNS.iter().any(|p| p.is_match(text))
}

/// First email, phone and introduced name, verbatim
fn detect_contact(text: &str) -> Option<ContactDetails> {
    let contact = ContactDetails {
        name: NAME_PATTERNS
            .iter()
            .find_map(|p| p.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        email: EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_PATTERN.find(text).map(|m| m.as_str().trim().to_string()),
    };

    (!contact.is_empty()).then_some(contact)
}
