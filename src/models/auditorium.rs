use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::PriceCategory;
use super::row::Row;
use super::seat::Seat;
use super::suggestion::SuggestionOutcome;

// Rows keep the order the layout provider produced them in; suggestion
// walks them front to back and the first satisfying row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auditorium {
    pub rows: Vec<Row>,
}

impl Auditorium {
    pub fn new(rows: Vec<Row>) -> Self {
        Auditorium { rows }
    }

    pub fn suggest(&self, party_size: u32, category: PriceCategory) -> SuggestionOutcome {
        for row in &self.rows {
            let outcome = row.suggest(party_size, category);
            if outcome.matches_party() {
                return outcome;
            }
        }

        SuggestionOutcome::not_available(party_size, category)
    }

    pub fn allocate(&self, seats: &[Seat]) -> Auditorium {
        let names: HashSet<String> = seats.iter().map(Seat::name).collect();

        Auditorium {
            rows: self.rows.iter().map(|row| row.allocate(&names)).collect(),
        }
    }
}
