use serde::{Deserialize, Serialize};

use super::category::PriceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Allocated,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub row: String,
    pub number: u32,
    pub category: PriceCategory,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(
        row: impl Into<String>,
        number: u32,
        category: PriceCategory,
        status: SeatStatus,
    ) -> Self {
        Seat {
            row: row.into(),
            number,
            category,
            status,
        }
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.row, self.number)
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    pub fn matches_category(&self, category: PriceCategory) -> bool {
        category == PriceCategory::Any || self.category == category
    }

    // Allocation never mutates: a taken seat is carried over as-is
    pub fn allocate(&self) -> Seat {
        if self.is_available() {
            Seat {
                status: SeatStatus::Allocated,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}
