use serde::{Deserialize, Serialize};

use crate::errors::SeatingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    First = 1,
    Second = 2,
    Third = 3,
    // Псевдо-категория: принимает место любой ценовой категории
    Any = 4,
}

impl PriceCategory {
    // Suggestion passes run in this order
    pub const ALL: [PriceCategory; 4] = [
        PriceCategory::First,
        PriceCategory::Second,
        PriceCategory::Third,
        PriceCategory::Any,
    ];

    pub fn from_code(code: i32) -> Result<Self, SeatingError> {
        match code {
            1 => Ok(PriceCategory::First),
            2 => Ok(PriceCategory::Second),
            3 => Ok(PriceCategory::Third),
            4 => Ok(PriceCategory::Any),
            _ => Err(SeatingError::UnknownCategory { code }),
        }
    }
}
