//! CSV ingestion for the game catalog.
//!
//! Parses a catalog export into `GameRecord`s for `ludex-core`. Quoting and
//! field unescaping are handled by the `csv` reader, so names containing
//! commas or quotes reach the core intact. Malformed rows are skipped with
//! a warning rather than aborting the load.

pub mod load;
pub mod progress;

pub use load::{ImportError, LOAD_INTERVAL, load_records, load_records_with_progress, records_from_reader};
pub use progress::{LoadProgress, LogProgress, SilentProgress};
