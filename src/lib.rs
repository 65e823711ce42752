pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use config::Config;
pub use database::ReviewStore;
pub use error::{DrillError, Result};
pub use models::{ChordCatalog, ChordDrill, ChordSymbol, Clock, ScheduleRecord, SystemClock};
