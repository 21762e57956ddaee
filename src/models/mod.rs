pub mod auditorium;
pub mod category;
pub mod center;
pub mod row;
pub mod seat;
pub mod suggestion;

pub use auditorium::Auditorium;
pub use category::PriceCategory;
pub use row::Row;
pub use seat::{Seat, SeatStatus};
pub use suggestion::{Suggestion, SuggestionOutcome, SuggestionsResult};
