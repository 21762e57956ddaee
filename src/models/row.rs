use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::PriceCategory;
use super::center::SeatWindow;
use super::seat::Seat;
use super::suggestion::SuggestionOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub seats: Vec<Seat>,
}

impl Row {
    pub fn new(name: impl Into<String>, seats: Vec<Seat>) -> Self {
        Row {
            name: name.into(),
            seats,
        }
    }

    pub fn size(&self) -> usize {
        self.seats.len()
    }

    /// Предлагает группу из `party_size` соседних мест, ближайшую к центру ряда
    pub fn suggest(&self, party_size: u32, category: PriceCategory) -> SuggestionOutcome {
        let party = party_size as usize;
        if party == 0 {
            return SuggestionOutcome::not_available(party_size, category);
        }

        let row_size = self.seats.len();
        let matching: Vec<&Seat> = self
            .seats
            .iter()
            .filter(|seat| seat.is_available() && seat.matches_category(category))
            .collect();

        if matching.len() < party {
            return SuggestionOutcome::not_available(party_size, category);
        }

        // Maximal runs of consecutive seat numbers. A reserved or
        // off-category seat in between breaks the run: the party has to sit
        // physically next to each other.
        let mut blocks: Vec<Vec<&Seat>> = Vec::new();
        let mut current: Vec<&Seat> = Vec::new();
        for seat in matching {
            match current.last() {
                Some(previous) if seat.number == previous.number + 1 => current.push(seat),
                Some(_) => {
                    blocks.push(std::mem::take(&mut current));
                    current.push(seat);
                }
                None => current.push(seat),
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        let best = blocks
            .iter()
            .filter(|block| block.len() >= party)
            .flat_map(|block| block.windows(party))
            .map(|window| {
                SeatWindow::new(window.iter().map(|seat| (*seat).clone()).collect(), row_size)
            })
            .min();

        match best {
            Some(window) => SuggestionOutcome::suggested(party_size, category, window.into_seats()),
            None => SuggestionOutcome::not_available(party_size, category),
        }
    }

    /// Возвращает новый ряд: названные свободные места становятся занятыми
    pub fn allocate(&self, names: &HashSet<String>) -> Row {
        let seats = self
            .seats
            .iter()
            .map(|seat| {
                if names.contains(&seat.name()) {
                    seat.allocate()
                } else {
                    seat.clone()
                }
            })
            .collect();

        Row {
            name: self.name.clone(),
            seats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::PriceCategory::{First, Second};
    use crate::models::seat::SeatStatus::{self, Available, Reserved};

    fn row(pattern: &[(PriceCategory, SeatStatus)]) -> Row {
        let seats = pattern
            .iter()
            .enumerate()
            .map(|(i, (category, status))| Seat::new("A", i as u32 + 1, *category, *status))
            .collect();
        Row::new("A", seats)
    }

    fn names(outcome: &SuggestionOutcome) -> Vec<String> {
        outcome.seats().iter().map(Seat::name).collect()
    }

    #[test]
    fn suggests_the_seat_closest_to_the_middle_of_an_even_row() {
        //      1   2   3   4   5   6   7   8   9  10
        //  A:  2   2   1  (1)  1   1   1  (1)  2   2
        let row = row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Reserved),
            (Second, Available),
            (Second, Available),
        ]);

        let outcome = row.suggest(1, First);

        assert!(outcome.matches_party());
        assert_eq!(names(&outcome), vec!["A5"]);
    }

    #[test]
    fn suggests_the_exact_middle_seat_of_an_odd_row() {
        //      1   2   3   4   5   6   7   8   9  10  11
        //  A:  2   2   1  (1)  1   1   1   1  (1)  2   2
        let row = row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Reserved),
            (Second, Available),
            (Second, Available),
        ]);

        let outcome = row.suggest(1, First);

        assert_eq!(names(&outcome), vec!["A6"]);
    }

    #[test]
    fn reserved_seats_break_adjacency() {
        //      1   2   3   4   5   6   7   8   9  10
        //  A:  2   2   1  (1)  1   1   1  (1)  2   2
        // Blocks of First: [A3], [A5 A6 A7] - only the second fits a party of 3
        let row = row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Available),
            (First, Available),
            (First, Reserved),
            (Second, Available),
            (Second, Available),
        ]);

        let outcome = row.suggest(3, First);

        assert_eq!(names(&outcome), vec!["A5", "A6", "A7"]);
    }

    #[test]
    fn picks_the_window_closest_to_the_middle_when_several_fit() {
        let row = row(&[(First, Available); 10]);

        let outcome = row.suggest(3, First);

        assert_eq!(names(&outcome), vec!["A4", "A5", "A6"]);
    }

    #[test]
    fn not_available_when_fewer_matching_seats_than_party() {
        let row = row(&[(First, Available), (First, Available)]);

        let outcome = row.suggest(3, First);

        assert!(!outcome.matches_party());
        assert!(outcome.seats().is_empty());
    }

    #[test]
    fn not_available_when_no_block_is_long_enough() {
        //  A:  1  (1)  1  (1)  1
        let row = row(&[
            (First, Available),
            (First, Reserved),
            (First, Available),
            (First, Reserved),
            (First, Available),
        ]);

        let outcome = row.suggest(2, First);

        assert!(!outcome.matches_party());
    }

    #[test]
    fn any_category_spans_price_boundaries() {
        //  A:  2   2   1   1 - one contiguous block for Any
        let row = row(&[
            (Second, Available),
            (Second, Available),
            (First, Available),
            (First, Available),
        ]);

        let outcome = row.suggest(4, PriceCategory::Any);

        assert_eq!(names(&outcome), vec!["A1", "A2", "A3", "A4"]);
    }

    #[test]
    fn allocate_returns_a_new_row_and_keeps_the_original() {
        let original = row(&[(First, Available), (First, Available)]);
        let to_allocate: HashSet<String> = ["A1".to_string()].into();

        let allocated = original.allocate(&to_allocate);

        assert!(original.seats[0].is_available());
        assert!(!allocated.seats[0].is_available());
        assert!(allocated.seats[1].is_available());
    }

    #[test]
    fn allocate_is_idempotent() {
        let original = row(&[(First, Available), (First, Available)]);
        let to_allocate: HashSet<String> = ["A1".to_string(), "A2".to_string()].into();

        let once = original.allocate(&to_allocate);
        let twice = once.allocate(&to_allocate);

        assert_eq!(once, twice);
    }
}
