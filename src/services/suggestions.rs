use tracing::{debug, info};

use crate::errors::SeatingError;
use crate::models::{Auditorium, PriceCategory, Suggestion, SuggestionsResult};
use crate::providers::{LayoutProvider, ReservationsProvider};
use crate::services::arrangements::ArrangementService;

// Сколько альтернативных предложений даём на одну ценовую категорию
const NUMBER_OF_SUGGESTIONS: usize = 3;

pub struct SuggestionService<L, R> {
    arrangements: ArrangementService<L, R>,
}

impl<L, R> SuggestionService<L, R>
where
    L: LayoutProvider,
    R: ReservationsProvider,
{
    pub fn new(layout: L, reservations: R) -> Self {
        Self {
            arrangements: ArrangementService::new(layout, reservations),
        }
    }

    /// Формирует предложения мест для показа по всем ценовым категориям
    pub fn make_suggestions(
        &self,
        show_id: &str,
        party_size: u32,
    ) -> Result<SuggestionsResult, SeatingError> {
        let auditorium = self.arrangements.load(show_id)?;

        let mut all_suggestions = Vec::new();
        for category in PriceCategory::ALL {
            all_suggestions.extend(Self::suggestions_for(&auditorium, party_size, category));
        }

        let result = SuggestionsResult::new(show_id, party_size, all_suggestions);
        if result.matches_expectations() {
            info!("🎭 Suggestions made for show {}, party of {}", show_id, party_size);
        } else {
            info!("🎭 No seating available for show {}, party of {}", show_id, party_size);
        }

        Ok(result)
    }

    // Each round allocates the offered seats into a private successor
    // snapshot, so the next round cannot offer them again. Every category
    // starts over from the pristine snapshot.
    fn suggestions_for(
        auditorium: &Auditorium,
        party_size: u32,
        category: PriceCategory,
    ) -> Vec<Suggestion> {
        let mut found = Vec::new();
        let mut current = auditorium.clone();

        for _ in 0..NUMBER_OF_SUGGESTIONS {
            let outcome = current.suggest(party_size, category);
            if !outcome.matches_party() {
                // availability for this category is exhausted
                break;
            }

            current = current.allocate(outcome.seats());
            if let Some(suggestion) = Suggestion::from_outcome(outcome) {
                debug!("{:?}: suggesting {}", category, suggestion.joined_names());
                found.push(suggestion);
            }
        }

        found
    }
}
