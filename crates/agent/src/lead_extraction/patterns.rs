//! Signal pattern tables
//!
//! Every table is ordered and consumed first-match-wins, so entry order is
//! behavior: specific phrasings sit above the broad ones that would also
//! match them. Patterns are compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

use nestiq_core::{PropertyType, Timeline};

/// A pattern that does not count when the match directly follows `not_after`
pub struct GuardedPattern {
    pattern: Regex,
    not_after: Option<Regex>,
}

impl GuardedPattern {
    fn new(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            not_after: None,
        }
    }

    /// `not_after` is matched against the text preceding each hit and should
    /// be anchored with `$`
    fn not_after(pattern: &str, not_after: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            not_after: Some(Regex::new(not_after).unwrap()),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.not_after {
            None => self.pattern.is_match(text),
            Some(guard) => self
                .pattern
                .find_iter(text)
                .any(|m| !guard.is_match(&text[..m.start()])),
        }
    }
}

// Intent: buying phraseology (intent verbs, relocation, financing)
pub static BUYING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"(?i)\b(buy|buying|purchase|purchasing|looking\s+for|looking\s+to\s+buy|want\s+to\s+buy|interested\s+in\s+buying|home\s+search|house\s+hunt|house\s+hunting)\b").unwrap(),
    Regex::new(r"(?i)\b(move\s+to|relocat|moving\s+to|need\s+a\s+home|need\s+a\s+house|find\s+a\s+place|find\s+a\s+home)\b").unwrap(),
    Regex::new(r"(?i)\b(pre-?approv|mortgage|down\s+payment|afford|what\s+can\s+i\s+afford)\b").unwrap(),
]);

// Intent: selling phraseology (listing, valuation, seller side)
pub static SELLING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"(?i)\b(sell|selling|list|listing|put\s+on\s+the\s+market|market\s+value|home\s+value|what\s+is\s+my\s+home\s+worth)\b").unwrap(),
    Regex::new(r"(?i)\b(sell\s+my\s+(home|house|condo|property|place))\b").unwrap(),
    Regex::new(r"(?i)\b(listing\s+agent|sell\s+side|seller)\b").unwrap(),
]);

// Intent: curiosity, only consulted when neither battery fired
pub static EXPLORING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"(?i)\b(curious|wondering|interested|learn|tell\s+me\s+about|what\s+(?:is|are)|how\s+(?:does|do|is|are))\b").unwrap(),
]);

// Budget: dollar amounts, numeric ranges, then budget/afford phrases
pub static BUDGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"(?i)\$\s?[\d,]+(?:\.\d+)?\s?(?:k|m|million|thousand)?").unwrap(),
    Regex::new(r"(?i)\b(\d[\d,]*(?:\.\d+)?)\s?(?:k|m|million|thousand)?\s*(?:to|-|and)\s*(\d[\d,]*(?:\.\d+)?)\s?(?:k|m|million|thousand)?\b").unwrap(),
    Regex::new(r"(?i)\b(?:budget|afford|spend|price\s+range)[^.]{0,30}?\$?\s?[\d,]+(?:\.\d+)?\s?(?:k|m|million|thousand)?").unwrap(),
]);

// Property type, most specific first. "detached" right after "semi" is the
// semi-detached entry's hit, not a detached house.
pub static PROPERTY_TYPE_PATTERNS: Lazy<Vec<(GuardedPattern, PropertyType)>> = Lazy::new(|| vec![
    (GuardedPattern::new(r"(?i)\b(condo|condominium|apartment|apt)\b"), PropertyType::Condo),
    (GuardedPattern::new(r"(?i)\b(townhouse|townhome|town\s+house|row\s+house|rowhouse)\b"), PropertyType::Townhouse),
    (GuardedPattern::not_after(r"(?i)\b(detached|single\s+family|single-family|standalone)\b", r"(?i)\bsemi[\s-]?$"), PropertyType::DetachedHouse),
    (GuardedPattern::new(r"(?i)\b(semi-?detached|semi|duplex)\b"), PropertyType::SemiDetached),
    (GuardedPattern::new(r"(?i)\b(house|home)\b"), PropertyType::House),
    (GuardedPattern::new(r"(?i)\b(land|lot|acreage)\b"), PropertyType::Land),
    (GuardedPattern::new(r"(?i)\b(multi-?family|investment\s+property|rental\s+property)\b"), PropertyType::MultiFamily),
    (GuardedPattern::new(r"(?i)\b(penthouse)\b"), PropertyType::Penthouse),
    (GuardedPattern::new(r"(?i)\b(loft)\b"), PropertyType::Loft),
]);

// Timeline, most urgent first; bare "soon" is the catch-all
pub static TIMELINE_PATTERNS: Lazy<Vec<(Regex, Timeline)>> = Lazy::new(|| vec![
    (Regex::new(r"(?i)\b(asap|as\s+soon\s+as\s+possible|immediately|urgent|right\s+away|this\s+month)\b").unwrap(), Timeline::Immediately),
    (Regex::new(r"(?i)\b(next\s+(?:few\s+)?(?:weeks?|month)|within\s+(?:a\s+)?month|1-?2\s+months?|couple\s+(?:of\s+)?months)\b").unwrap(), Timeline::OneToTwoMonths),
    (Regex::new(r"(?i)\b(3\s*-?\s*6\s+months?|few\s+months|this\s+(?:spring|summer|fall|winter|year)|next\s+few\s+months)\b").unwrap(), Timeline::ThreeToSixMonths),
    (Regex::new(r"(?i)\b(6\s*-?\s*12\s+months?|within\s+(?:a\s+)?year|next\s+year|this\s+year)\b").unwrap(), Timeline::SixToTwelveMonths),
    (Regex::new(r"(?i)\b(1-?2\s+years?|couple\s+(?:of\s+)?years|in\s+a\s+year\s+or\s+two)\b").unwrap(), Timeline::OneToTwoYears),
    (Regex::new(r"(?i)\b(no\s+rush|just\s+(?:looking|browsing|exploring)|eventually|down\s+the\s+(?:road|line)|someday|not\s+in\s+a\s+hurry)\b").unwrap(), Timeline::NoRush),
    (Regex::new(r"(?i)\b(soon)\b").unwrap(), Timeline::Soon),
]);

// Area mentions are case-sensitive: place names must be capitalized
pub static AREA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"\b(?:in|near|around|close\s+to)\s+([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+){0,2})\b").unwrap(),
    Regex::new(r"\b([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+){0,2})\s+(?:area|neighbourhood|neighborhood|district|community)\b").unwrap(),
]);

/// Capitalized words that the area patterns pick up but are not places
pub const AREA_STOPLIST: &[&str] = &[
    "I", "The", "This", "That", "My", "Your", "It", "We", "They",
    "What", "Where", "When", "How", "Why", "Who", "Which",
    "Yes", "No", "Not", "Just", "Also", "But", "And", "Or",
    "Can", "Could", "Would", "Should", "Will", "May", "Might",
    "Some", "Any", "All", "Many", "Much", "More", "Most",
    "Very", "Really", "About", "Around", "Here", "There",
    "Google", "Maps", "Thanks", "Thank", "Hi", "Hello", "Hey",
];

pub static FIRST_TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"(?i)\b(first[\s-]?time\s+(?:home\s*)?buyer)").unwrap(),
    Regex::new(r"(?i)\b(first\s+home|first\s+house|first\s+property|first\s+condo|never\s+(?:bought|owned|purchased))").unwrap(),
    Regex::new(r"(?i)\b(first[\s-]?time\s+buying)").unwrap(),
]);

pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

// North American numbers, optional +1 and separators
pub static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

// Introduction phrase in any case, then a capitalized one- or two-word name
pub static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| vec![
    Regex::new(r"\b(?i:my\s+name\s+is|i'?m|i\s+am|this\s+is|call\s+me)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b").unwrap(),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(BUYING_PATTERNS.len(), 3);
        assert_eq!(SELLING_PATTERNS.len(), 3);
        assert_eq!(BUDGET_PATTERNS.len(), 3);
        assert_eq!(PROPERTY_TYPE_PATTERNS.len(), 9);
        assert_eq!(TIMELINE_PATTERNS.len(), 7);
        assert_eq!(AREA_PATTERNS.len(), 2);
        assert!(EMAIL_PATTERN.is_match("jane@example.com"));
        assert!(PHONE_PATTERN.is_match("(604) 555-1234"));
    }

    #[test]
    fn test_guarded_detached_pattern() {
        let (detached, ty) = &PROPERTY_TYPE_PATTERNS[2];
        assert_eq!(*ty, PropertyType::DetachedHouse);
        assert!(detached.is_match("a detached place"));
        assert!(!detached.is_match("a semi-detached place"));
        assert!(!detached.is_match("a Semi detached place"));
        assert!(detached.is_match("semi-detached or fully detached"));
    }

    #[test]
    fn test_name_prefix_case_insensitive_name_capitalized() {
        let name = &NAME_PATTERNS[0];
        let caps = name.captures("Hi, My name is Jane Doe").unwrap();
        assert_eq!(&caps[1], "Jane Doe");
        assert!(!name.is_match("i'm looking for a condo"));
        assert!(name.is_match("call me Priya"));
    }
}
