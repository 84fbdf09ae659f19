//! Per-facet indexes over the record set.
//!
//! Each index maps one searchable dimension to the ids carrying that key,
//! built in a single pass over all records. Ordered dimensions (release
//! date, review count) live in `BTreeMap`s so range queries walk keys in
//! order; exact-key dimensions (developer, publisher, tag) live in
//! `HashMap`s with a first-seen key list for browsing.
//!
//! Lookups never fail: an absent key, an unparsable query, or a degenerate
//! range all produce an empty candidate set, with a notice on the `log`
//! side channel.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::date::ReleaseDate;
use crate::record::{ATTR_POSITIVE_REVIEWS, AppId, GameRecord};

// ── Release date ────────────────────────────────────────────────────────────

/// Ordered one-to-many index from release date to app ids, with the derived
/// earliest/latest bounds computed in the same build pass.
pub struct DateIndex {
    entries: BTreeMap<ReleaseDate, Vec<AppId>>,
    bounds: Option<(ReleaseDate, ReleaseDate)>,
}

impl DateIndex {
    /// Index every record with a parseable release date. Records whose date
    /// text does not parse are skipped with a warning and stay reachable
    /// through the other facets.
    pub fn build(records: &[GameRecord]) -> Self {
        let mut entries: BTreeMap<ReleaseDate, Vec<AppId>> = BTreeMap::new();
        for record in records {
            match record.release_date_text().parse::<ReleaseDate>() {
                Ok(date) => entries.entry(date).or_default().push(record.id()),
                Err(e) => log::warn!("game {} not date-indexed: {e}", record.id()),
            }
        }

        let bounds = match (entries.first_key_value(), entries.last_key_value()) {
            (Some((&min, _)), Some((&max, _))) => Some((min, max)),
            _ => None,
        };

        Self { entries, bounds }
    }

    /// Earliest and latest indexed dates, `None` for an empty index.
    pub fn bounds(&self) -> Option<(ReleaseDate, ReleaseDate)> {
        self.bounds
    }

    /// Number of distinct indexed dates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All ids released in `[snap(begin), snap(end)]`, both endpoints
    /// inclusive.
    ///
    /// `begin` snaps forward and `end` snaps backward to the nearest date
    /// actually present in the index; unparsable text or a bound outside
    /// the catalog substitutes the matching catalog bound. If the snapped
    /// begin ends up after the snapped end the range is degenerate and the
    /// result is empty.
    ///
    /// The snap steps day-by-day, so it is linear in the gap between the
    /// requested date and the nearest present one. Catalogs are loaded once
    /// and queried interactively, where the gaps are days, not centuries.
    pub fn lookup_range(&self, begin: &str, end: &str) -> BTreeSet<AppId> {
        let Some((min, max)) = self.bounds else {
            return BTreeSet::new();
        };

        let (Some(begin), Some(end)) = (
            self.snap_forward(begin, min, max),
            self.snap_backward(end, min, max),
        ) else {
            return BTreeSet::new();
        };

        if begin > end {
            log::info!("date range {begin}..{end} is empty");
            return BTreeSet::new();
        }

        self.entries
            .range(begin..=end)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    /// Resolve a begin bound to the nearest present date at or after it.
    fn snap_forward(
        &self,
        text: &str,
        min: ReleaseDate,
        max: ReleaseDate,
    ) -> Option<ReleaseDate> {
        let mut date = match text.parse::<ReleaseDate>() {
            Ok(date) => date,
            Err(e) => {
                log::warn!("start date: {e}; using earliest catalog date {min}");
                return Some(min);
            }
        };

        if date < min {
            log::warn!("{date} precedes the catalog; using earliest date {min}");
            date = min;
        }

        while !self.entries.contains_key(&date) {
            if date >= max {
                return None;
            }
            date = date.next()?;
        }
        Some(date)
    }

    /// Resolve an end bound to the nearest present date at or before it.
    fn snap_backward(
        &self,
        text: &str,
        min: ReleaseDate,
        max: ReleaseDate,
    ) -> Option<ReleaseDate> {
        let mut date = match text.parse::<ReleaseDate>() {
            Ok(date) => date,
            Err(e) => {
                log::warn!("end date: {e}; using latest catalog date {max}");
                return Some(max);
            }
        };

        if date > max {
            log::warn!("{date} is past the catalog; using latest date {max}");
            date = max;
        }

        while !self.entries.contains_key(&date) {
            if date <= min {
                return None;
            }
            date = date.prev()?;
        }
        Some(date)
    }
}

// ── Exact keys (developer, publisher, tag) ──────────────────────────────────

/// Exact-key one-to-many index for a `;`-delimited attribute, plus the keys
/// in first-seen order for term browsing.
pub struct KeyIndex {
    entries: HashMap<String, Vec<AppId>>,
    keys: Vec<String>,
}

impl KeyIndex {
    /// Index the `;`-delimited attribute at `attribute` for every record.
    /// A record carrying several entries is indexed under each of them.
    pub fn build(records: &[GameRecord], attribute: usize) -> Self {
        let mut entries: HashMap<String, Vec<AppId>> = HashMap::new();
        let mut keys = Vec::new();

        for record in records {
            for key in record.list_attribute(attribute) {
                match entries.get_mut(key) {
                    Some(ids) => {
                        // A repeated entry within one record is indexed once.
                        if ids.last() != Some(&record.id()) {
                            ids.push(record.id());
                        }
                    }
                    None => {
                        entries.insert(key.to_string(), vec![record.id()]);
                        keys.push(key.to_string());
                    }
                }
            }
        }

        Self { entries, keys }
    }

    /// Ids carrying exactly `key`. An absent key yields the empty set.
    pub fn lookup(&self, key: &str) -> BTreeSet<AppId> {
        match self.entries.get(key) {
            Some(ids) => ids.iter().copied().collect(),
            None => {
                log::info!("no entries for {key:?}");
                BTreeSet::new()
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in the order they were first seen.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ── Review count ────────────────────────────────────────────────────────────

/// Ordered one-to-many index from positive-review count to app ids.
pub struct ReviewIndex {
    entries: BTreeMap<u64, Vec<AppId>>,
}

impl ReviewIndex {
    pub fn build(records: &[GameRecord]) -> Self {
        let mut entries: BTreeMap<u64, Vec<AppId>> = BTreeMap::new();
        for record in records {
            match record.attribute(ATTR_POSITIVE_REVIEWS).trim().parse::<u64>() {
                Ok(count) => entries.entry(count).or_default().push(record.id()),
                Err(_) => log::warn!(
                    "game {} not review-indexed: unparsable count {:?}",
                    record.id(),
                    record.attribute(ATTR_POSITIVE_REVIEWS),
                ),
            }
        }
        Self { entries }
    }

    /// All ids with at least `threshold` positive reviews, the threshold
    /// given as text.
    ///
    /// When no record has exactly the requested count, the threshold
    /// effectively rounds up to the nearest present count and the whole
    /// upward closure from there is returned. A threshold past the highest
    /// count, or unparsable text, yields the empty set.
    pub fn lookup_at_least(&self, threshold: &str) -> BTreeSet<AppId> {
        let count = match threshold.trim().parse::<u64>() {
            Ok(count) => count,
            Err(e) => {
                log::warn!("review threshold {threshold:?}: {e}");
                return BTreeSet::new();
            }
        };

        self.entries
            .range(count..)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
