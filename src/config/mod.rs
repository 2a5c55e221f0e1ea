pub mod settings;

pub use settings::{AppConfig, HistorySettings, ParserSettings};
