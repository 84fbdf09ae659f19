//! Faceted in-memory search over a fixed game catalog.
//!
//! Records are indexed once per facet (release date, developer, publisher,
//! genre, review count) at catalog construction; queries look up candidate
//! id sets per facet and intersect them. There is no persistence and no
//! mutation after load — a built catalog is a read-only snapshot.

pub mod catalog;
pub mod date;
pub mod error;
pub mod index;
pub mod merge;
pub mod record;

pub use catalog::{GameCatalog, NAME_NOT_FOUND, SearchQuery};
pub use date::{ReleaseDate, is_leap_year};
pub use error::{DateError, RecordError};
pub use index::{DateIndex, KeyIndex, ReviewIndex};
pub use merge::{intersect_adjacent, intersect_smallest_first};
pub use record::{AppId, GameRecord, RECORD_FIELDS};
