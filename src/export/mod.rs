pub mod json;

pub use json::{export_progress_to_path, import_progress};
