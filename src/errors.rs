use thiserror::Error;

// Ошибки построения рассадки: плохие данные источника фатальны,
// отсутствие свободных мест ошибкой не является.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatingError {
    #[error("invalid seat name '{seat}' in row '{row}'")]
    InvalidSeatName { row: String, seat: String },

    #[error("no price category for code {code}")]
    UnknownCategory { code: i32 },
}
