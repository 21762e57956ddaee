use serde::{Deserialize, Serialize};

// Wire format of the auditorium layout source. Field names follow the
// upstream stub JSON (PascalCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeatDto {
    pub name: String,
    pub category: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RowDto {
    pub name: String,
    pub seats: Vec<SeatDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LayoutDto {
    pub rows: Vec<RowDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedSeatsDto {
    pub reserved_seats: Vec<String>,
}

/// Источник физической планировки зала для показа
pub trait LayoutProvider {
    fn find_layout(&self, show_id: &str) -> LayoutDto;
}

/// Источник уже зарезервированных мест для показа
pub trait ReservationsProvider {
    fn reserved_seats(&self, show_id: &str) -> ReservedSeatsDto;
}
