pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use errors::SeatingError;
pub use models::{Auditorium, PriceCategory, Row, Seat, SeatStatus, SuggestionsResult};
pub use services::SuggestionService;

// Инициализация логирования для всего приложения
pub fn init_tracing(config: &config::Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
