//! The catalog: records plus every facet index, built once.
//!
//! Construction indexes the whole record set in a single pass per facet, so
//! a built [`GameCatalog`] is an immutable snapshot — queries only read,
//! and concurrent readers can share it freely. Rebuild a new catalog to
//! pick up a new record set.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::date::ReleaseDate;
use crate::index::{DateIndex, KeyIndex, ReviewIndex};
use crate::merge::intersect_smallest_first;
use crate::record::{ATTR_DEVELOPERS, ATTR_PUBLISHERS, ATTR_TAGS, AppId, GameRecord};

/// Display name returned for an id the catalog does not know.
pub const NAME_NOT_FOUND: &str = "[unknown]";

/// One search term per facet; `None` or an empty string skips the facet.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Begin and end release-date text. Either half may be blank; a blank
    /// half falls back to the matching catalog bound.
    pub date_range: Option<(String, String)>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    /// Minimum positive-review count, as text.
    pub min_reviews: Option<String>,
}

impl SearchQuery {
    /// True when every term is blank.
    pub fn is_blank(&self) -> bool {
        self.date_range.is_none()
            && term(&self.developer).is_none()
            && term(&self.publisher).is_none()
            && term(&self.genre).is_none()
            && term(&self.min_reviews).is_none()
    }
}

fn term(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

/// Immutable record set plus the facet indexes over it.
pub struct GameCatalog {
    records: Vec<GameRecord>,
    names: HashMap<AppId, String>,
    dates: DateIndex,
    developers: KeyIndex,
    publishers: KeyIndex,
    genres: KeyIndex,
    reviews: ReviewIndex,
}

impl GameCatalog {
    /// Build every facet index from the record sequence. Insertion order of
    /// `records` is preserved and never mutated afterwards.
    pub fn new(records: Vec<GameRecord>) -> Self {
        let start = Instant::now();

        let names = records
            .iter()
            .map(|record| (record.id(), record.name().to_string()))
            .collect();
        let dates = DateIndex::build(&records);
        let developers = KeyIndex::build(&records, ATTR_DEVELOPERS);
        let publishers = KeyIndex::build(&records, ATTR_PUBLISHERS);
        let genres = KeyIndex::build(&records, ATTR_TAGS);
        let reviews = ReviewIndex::build(&records);

        log::info!(
            "indexed {} games in {:.2?} ({} developers, {} publishers, {} genres, {} dates)",
            records.len(),
            start.elapsed(),
            developers.len(),
            publishers.len(),
            genres.len(),
            dates.len(),
        );

        Self {
            records,
            names,
            dates,
            developers,
            publishers,
            genres,
            reviews,
        }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Per-facet queries ───────────────────────────────────────────────────

    /// Ids released between `begin` and `end` inclusive, after snapping the
    /// bounds to dates present in the catalog.
    pub fn search_by_date(&self, begin: &str, end: &str) -> BTreeSet<AppId> {
        let start = Instant::now();
        let result = self.dates.lookup_range(begin, end);
        log::debug!("date search took {:.2?}", start.elapsed());
        result
    }

    pub fn search_by_developer(&self, name: &str) -> BTreeSet<AppId> {
        self.developers.lookup(name)
    }

    pub fn search_by_publisher(&self, name: &str) -> BTreeSet<AppId> {
        self.publishers.lookup(name)
    }

    pub fn search_by_genre(&self, name: &str) -> BTreeSet<AppId> {
        self.genres.lookup(name)
    }

    /// Ids with at least the given number of positive reviews; see
    /// [`ReviewIndex::lookup_at_least`] for the threshold rounding rule.
    pub fn search_by_min_reviews(&self, threshold: &str) -> BTreeSet<AppId> {
        self.reviews.lookup_at_least(threshold)
    }

    // ── Lookup and browsing ─────────────────────────────────────────────────

    /// Display name for `id`, if the catalog knows it.
    pub fn name(&self, id: AppId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name for `id`, or [`NAME_NOT_FOUND`] for an unknown id.
    /// Never fails, so batch resolution always completes.
    pub fn resolve_name(&self, id: AppId) -> &str {
        self.name(id).unwrap_or_else(|| {
            log::info!("no game with id {id}");
            NAME_NOT_FOUND
        })
    }

    /// Earliest and latest release dates across the catalog, `None` when no
    /// record carried a parseable date.
    pub fn date_bounds(&self) -> Option<(ReleaseDate, ReleaseDate)> {
        self.dates.bounds()
    }

    pub fn developer_names(&self) -> &[String] {
        self.developers.keys()
    }

    pub fn publisher_names(&self) -> &[String] {
        self.publishers.keys()
    }

    pub fn genre_names(&self) -> &[String] {
        self.genres.keys()
    }

    // ── Combined search ─────────────────────────────────────────────────────

    /// Run one facet search per non-blank term, intersect the candidate
    /// sets, and resolve the survivors to display names in ascending-id
    /// order. A query with every term blank matches nothing.
    pub fn combine_and_resolve(&self, query: &SearchQuery) -> Vec<String> {
        let mut candidates = Vec::new();

        if let Some((begin, end)) = &query.date_range {
            candidates.push(self.search_by_date(begin, end));
        }
        if let Some(developer) = term(&query.developer) {
            candidates.push(self.search_by_developer(developer));
        }
        if let Some(publisher) = term(&query.publisher) {
            candidates.push(self.search_by_publisher(publisher));
        }
        if let Some(genre) = term(&query.genre) {
            candidates.push(self.search_by_genre(genre));
        }
        if let Some(threshold) = term(&query.min_reviews) {
            candidates.push(self.search_by_min_reviews(threshold));
        }

        if candidates.is_empty() {
            return Vec::new();
        }

        intersect_smallest_first(candidates)
            .into_iter()
            .map(|id| self.resolve_name(id).to_string())
            .collect()
    }
}
