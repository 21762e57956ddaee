use std::collections::BTreeMap;

use serde::Serialize;

use super::category::PriceCategory;
use super::seat::Seat;

// Outcome of one suggestion attempt against a row or a whole auditorium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Suggested {
        party_size: u32,
        category: PriceCategory,
        seats: Vec<Seat>,
    },
    NotAvailable {
        party_size: u32,
        category: PriceCategory,
    },
}

impl SuggestionOutcome {
    pub fn suggested(party_size: u32, category: PriceCategory, seats: Vec<Seat>) -> Self {
        SuggestionOutcome::Suggested {
            party_size,
            category,
            seats,
        }
    }

    pub fn not_available(party_size: u32, category: PriceCategory) -> Self {
        SuggestionOutcome::NotAvailable {
            party_size,
            category,
        }
    }

    pub fn matches_party(&self) -> bool {
        match self {
            SuggestionOutcome::Suggested {
                party_size, seats, ..
            } => seats.len() == *party_size as usize,
            SuggestionOutcome::NotAvailable { .. } => false,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        match self {
            SuggestionOutcome::Suggested { seats, .. } => seats,
            SuggestionOutcome::NotAvailable { .. } => &[],
        }
    }

    pub fn party_size(&self) -> u32 {
        match self {
            SuggestionOutcome::Suggested { party_size, .. }
            | SuggestionOutcome::NotAvailable { party_size, .. } => *party_size,
        }
    }

    pub fn category(&self) -> PriceCategory {
        match self {
            SuggestionOutcome::Suggested { category, .. }
            | SuggestionOutcome::NotAvailable { category, .. } => *category,
        }
    }
}

// One accepted suggestion: the seats offered to the party in a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub party_size: u32,
    pub category: PriceCategory,
    pub seats: Vec<Seat>,
}

impl Suggestion {
    pub fn from_outcome(outcome: SuggestionOutcome) -> Option<Suggestion> {
        match outcome {
            SuggestionOutcome::Suggested {
                party_size,
                category,
                seats,
            } => Some(Suggestion {
                party_size,
                category,
                seats,
            }),
            SuggestionOutcome::NotAvailable { .. } => None,
        }
    }

    pub fn seat_names(&self) -> Vec<String> {
        self.seats.iter().map(Seat::name).collect()
    }

    // Presentation form, e.g. "A4-A5-A6"
    pub fn joined_names(&self) -> String {
        self.seat_names().join("-")
    }

    pub fn matches_party(&self) -> bool {
        self.seats.len() == self.party_size as usize
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResult {
    pub show_id: String,
    pub party_size: u32,
    pub by_category: BTreeMap<PriceCategory, Vec<Suggestion>>,
}

impl SuggestionsResult {
    pub fn new(show_id: impl Into<String>, party_size: u32, suggestions: Vec<Suggestion>) -> Self {
        let empty: BTreeMap<PriceCategory, Vec<Suggestion>> = PriceCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        let by_category = suggestions.into_iter().fold(empty, |mut acc, suggestion| {
            acc.entry(suggestion.category).or_default().push(suggestion);
            acc
        });

        SuggestionsResult {
            show_id: show_id.into(),
            party_size,
            by_category,
        }
    }

    pub fn seat_names(&self, category: PriceCategory) -> Vec<String> {
        self.by_category
            .get(&category)
            .map(|suggestions| suggestions.iter().map(Suggestion::joined_names).collect())
            .unwrap_or_default()
    }

    pub fn matches_expectations(&self) -> bool {
        self.by_category
            .values()
            .flatten()
            .any(Suggestion::matches_party)
    }
}
