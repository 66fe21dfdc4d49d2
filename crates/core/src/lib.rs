//! Core types and traits for the lead qualification and transfer-tax engine
//!
//! This crate provides the types shared by the other crates:
//! - Conversation messages handed in by the chat backend
//! - The scored lead profile produced by signal extraction
//! - Transfer tax inputs, tiers and results
//! - Money rounding and formatting helpers
//! - The `TaxCalculator` trait
//! - Error types

pub mod conversation;
pub mod error;
pub mod lead;
pub mod money;
pub mod tax;
pub mod traits;

pub use conversation::{user_text, ConversationMessage, MessageRole};
pub use error::{Error, Result};
pub use lead::{
    ContactDetails, ExtractedLeadProfile, LeadIntent, PropertyType, Timeline, MAX_LEAD_SCORE,
};
pub use money::{currency_symbol, format_currency, group_thousands, round_cents};
pub use tax::{Jurisdiction, TaxCalculationInput, TaxCalculationResult, TaxTier};
pub use traits::TaxCalculator;
