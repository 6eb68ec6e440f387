//! Jersey catalog: the collection records behind the public showcase.
//!
//! The showcase lists every jersey marked public, filtered by a free-text
//! search and ordered by a whitelisted sort field. The full collection
//! (public or not) backs the dashboard and statistics views.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

/// Jerseys shown per showcase page.
pub const PER_PAGE: usize = 9;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One jersey in the collection.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Jersey {
    /// Stable identifier; also the insertion order of the record.
    pub id: u32,
    pub team: String,
    pub player: String,
    /// Free-form, so ranges like `2021-2022` work.
    pub season: String,
    /// Photo path relative to the static asset root.
    pub photo: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Owner-estimated value in euro.
    #[serde(default)]
    pub estimated_value: Option<f64>,
    /// Whether the jersey appears in the public showcase.
    #[serde(default)]
    pub showcased: bool,
}

/// The whole collection, as embedded in the static data asset.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub jerseys: Vec<Jersey>,
}

impl Catalog {
    /// Decode a catalog from its JSON asset.
    ///
    /// # Errors
    /// Returns a [`CatalogError`] when the asset is not valid catalog JSON.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(data)?)
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Jersey> {
        self.jerseys.iter().find(|jersey| jersey.id == id)
    }

    /// Jerseys visible in the public showcase.
    pub fn showcased(&self) -> impl Iterator<Item = &Jersey> {
        self.jerseys.iter().filter(|jersey| jersey.showcased)
    }
}

/// Case-insensitive substring search across team, player and season.
/// An empty or whitespace-only query keeps every entry.
#[must_use]
pub fn search<'a>(items: &[&'a Jersey], query: &str) -> Vec<&'a Jersey> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|jersey| {
            jersey.team.to_lowercase().contains(&needle)
                || jersey.player.to_lowercase().contains(&needle)
                || jersey.season.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortKey {
    Team,
    Player,
    Season,
    Added,
}

/// A whitelisted sort field plus direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortSpec {
    pub key: SortKey,
    pub descending: bool,
}

impl SortSpec {
    /// Showcase default: most recent season first.
    pub const DEFAULT: Self = Self {
        key: SortKey::Season,
        descending: true,
    };

    /// Parse a sort field in the query-string convention (`team`, `-season`,
    /// ...). Unknown fields yield `None`; callers fall back to
    /// [`SortSpec::DEFAULT`].
    #[must_use]
    pub fn parse(field: &str) -> Option<Self> {
        let (name, descending) = match field.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (field, false),
        };
        let key = match name {
            "team" => SortKey::Team,
            "player" => SortKey::Player,
            "season" => SortKey::Season,
            "added" => SortKey::Added,
            _ => return None,
        };
        Some(Self { key, descending })
    }

    /// Query-string form, round-tripping [`SortSpec::parse`].
    #[must_use]
    pub fn as_field(self) -> String {
        let name = match self.key {
            SortKey::Team => "team",
            SortKey::Player => "player",
            SortKey::Season => "season",
            SortKey::Added => "added",
        };
        if self.descending {
            format!("-{name}")
        } else {
            name.to_string()
        }
    }
}

/// Order showcase entries in place according to `spec`.
pub fn sort(items: &mut [&Jersey], spec: SortSpec) {
    items.sort_by(|a, b| {
        let ord = match spec.key {
            SortKey::Team => a.team.cmp(&b.team),
            SortKey::Player => a.player.cmp(&b.player),
            SortKey::Season => a.season.cmp(&b.season),
            SortKey::Added => a.id.cmp(&b.id),
        };
        if spec.descending { ord.reverse() } else { ord }
    });
}

/// Slice bounds of one showcase page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Page {
    /// 1-based page number actually served.
    pub current: usize,
    /// Number of pages (at least 1, even for an empty list).
    pub total: usize,
    pub start: usize,
    pub end: usize,
}

/// Compute the slice bounds for one page. Pages are 1-based; a request
/// below 1 serves the first page and a request past the end serves the
/// last one.
#[must_use]
pub fn page(len: usize, requested: usize, per_page: usize) -> Page {
    let per_page = per_page.max(1);
    let total = len.div_ceil(per_page).max(1);
    let current = requested.clamp(1, total);
    let start = ((current - 1) * per_page).min(len);
    let end = (start + per_page).min(len);
    Page {
        current,
        total,
        start,
        end,
    }
}

/// Aggregates for the statistics view.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub showcased: usize,
    /// Sum of the owner-estimated values, euro.
    pub estimated_total: f64,
    /// Most-represented teams: count descending, ties alphabetical.
    pub top_teams: Vec<(String, usize)>,
}

#[must_use]
pub fn stats(jerseys: &[Jersey]) -> CatalogStats {
    let mut teams: BTreeMap<&str, usize> = BTreeMap::new();
    for jersey in jerseys {
        *teams.entry(jersey.team.as_str()).or_default() += 1;
    }
    let mut top_teams: Vec<(String, usize)> = teams
        .into_iter()
        .map(|(team, count)| (team.to_string(), count))
        .collect();
    top_teams.sort_by(|a, b| match b.1.cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    CatalogStats {
        total: jerseys.len(),
        showcased: jerseys.iter().filter(|jersey| jersey.showcased).count(),
        estimated_total: jerseys.iter().filter_map(|jersey| jersey.estimated_value).sum(),
        top_teams,
    }
}
