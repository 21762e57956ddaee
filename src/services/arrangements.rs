use std::collections::HashSet;

use tracing::debug;

use crate::errors::SeatingError;
use crate::models::{Auditorium, PriceCategory, Row, Seat, SeatStatus};
use crate::providers::{LayoutProvider, ReservationsProvider};

// Строит снимок рассадки зала из двух внешних источников
pub struct ArrangementService<L, R> {
    layout: L,
    reservations: R,
}

impl<L, R> ArrangementService<L, R>
where
    L: LayoutProvider,
    R: ReservationsProvider,
{
    pub fn new(layout: L, reservations: R) -> Self {
        Self {
            layout,
            reservations,
        }
    }

    /// Загружает планировку и резервы показа и собирает из них зал
    pub fn load(&self, show_id: &str) -> Result<Auditorium, SeatingError> {
        let layout = self.layout.find_layout(show_id);
        let reserved: HashSet<String> = self
            .reservations
            .reserved_seats(show_id)
            .reserved_seats
            .into_iter()
            .collect();

        let mut rows = Vec::with_capacity(layout.rows.len());
        for row_dto in layout.rows {
            let mut seats = Vec::with_capacity(row_dto.seats.len());
            for seat_dto in row_dto.seats {
                let number = parse_seat_number(&row_dto.name, &seat_dto.name)?;
                let category = PriceCategory::from_code(seat_dto.category)?;
                let status = if reserved.contains(&seat_dto.name) {
                    SeatStatus::Reserved
                } else {
                    SeatStatus::Available
                };

                seats.push(Seat::new(row_dto.name.clone(), number, category, status));
            }
            rows.push(Row::new(row_dto.name, seats));
        }

        debug!("Auditorium for show {} loaded: {} rows", show_id, rows.len());
        Ok(Auditorium::new(rows))
    }
}

// Seat names carry the row id as prefix ("A12" in row "A"); anything else
// is corrupt source data.
fn parse_seat_number(row_name: &str, seat_name: &str) -> Result<u32, SeatingError> {
    seat_name
        .strip_prefix(row_name)
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .filter(|number| *number > 0)
        .ok_or_else(|| SeatingError::InvalidSeatName {
            row: row_name.to_string(),
            seat: seat_name.to_string(),
        })
}
