//! Lead qualification for chat transcripts
//!
//! Features:
//! - Deterministic signal extraction (intent, budget, property type,
//!   timeline, areas, first-time buyer, contact info)
//! - Fixed per-category lead scoring, clamped to 0-100
//! - Config-driven qualification levels (cold / warm / hot / qualified)

pub mod lead_extraction;
pub mod lead_scoring;

pub use lead_extraction::{extract, LeadSignalExtractor};
pub use lead_scoring::{LeadAssessment, LeadQualification, ScoreBreakdown};
