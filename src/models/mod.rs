pub mod catalog;
pub mod chord;
pub mod chord_drill;
pub mod schedule_record;
pub mod scheduler;
pub mod selection;

pub use catalog::ChordCatalog;
pub use chord::{ChordQuality, ChordSymbol, PitchClass};
pub use chord_drill::{ChordDrill, Clock, SystemClock};
pub use schedule_record::{ProgressStats, ScheduleRecord};
pub use selection::pick_next;
