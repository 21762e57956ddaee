#![allow(dead_code)]

use seating_system::providers::{
    LayoutDto, LayoutProvider, ReservationsProvider, ReservedSeatsDto, RowDto, SeatDto,
};

// In-memory stand-ins for the two external read interfaces.

pub struct StubLayout(pub LayoutDto);

impl LayoutProvider for StubLayout {
    fn find_layout(&self, _show_id: &str) -> LayoutDto {
        self.0.clone()
    }
}

pub struct StubReservations(pub Vec<String>);

impl ReservationsProvider for StubReservations {
    fn reserved_seats(&self, _show_id: &str) -> ReservedSeatsDto {
        ReservedSeatsDto {
            reserved_seats: self.0.clone(),
        }
    }
}

/// Builds a layout from per-row category codes: seats are numbered from 1
/// and named `<row><number>`.
pub fn house(rows: &[(&str, &[i32])]) -> LayoutDto {
    LayoutDto {
        rows: rows
            .iter()
            .map(|(name, categories)| RowDto {
                name: name.to_string(),
                seats: categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| SeatDto {
                        name: format!("{}{}", name, i + 1),
                        category: *category,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn reserved(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
