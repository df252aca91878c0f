//! Relevance search over the site content catalog.
//!
//! A linear scan: each entry is scored against the lowercased query and
//! entries with a positive score are kept.

pub mod catalog;

pub use catalog::{ContentEntry, ContentKind, CONTENT};

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const EXACT_TITLE: u32 = 100;
const TITLE_MATCH: u32 = 50;
const CATEGORY_MATCH: u32 = 30;
const TAG_MATCH: u32 = 20;
const DESCRIPTION_MATCH: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Relevance,
    Date,
    Title,
}

impl SortBy {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Relevance => "Most Relevant",
            SortBy::Date => "Newest First",
            SortBy::Title => "A-Z Title",
        }
    }

    #[must_use]
    pub fn cycle(self) -> SortBy {
        match self {
            SortBy::Relevance => SortBy::Date,
            SortBy::Date => SortBy::Title,
            SortBy::Title => SortBy::Relevance,
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortBy::Relevance),
            "date" => Ok(SortBy::Date),
            "title" => Ok(SortBy::Title),
            other => Err(format!("unknown sort '{other}' (expected relevance, date or title)")),
        }
    }
}

/// Restricts results to one content kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(ContentKind),
}

impl KindFilter {
    #[must_use]
    pub fn matches(self, kind: ContentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(only) => only == kind,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindFilter::All => f.write_str("All"),
            KindFilter::Only(kind) => write!(f, "{kind}"),
        }
    }
}

impl FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(KindFilter::All);
        }
        ContentKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s))
            .map(KindFilter::Only)
            .ok_or_else(|| format!("unknown kind '{s}' (expected all, page, blog or case-study)"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub entry: &'static ContentEntry,
    pub score: u32,
}

/// Relevance of one entry for an already lowercased query.
#[must_use]
pub fn score_entry(entry: &ContentEntry, term: &str) -> u32 {
    let title = entry.title.to_lowercase();
    let mut score = 0;
    if title == term {
        score += EXACT_TITLE;
    }
    if title.contains(term) {
        score += TITLE_MATCH;
    }
    if entry
        .category
        .is_some_and(|c| c.to_lowercase().contains(term))
    {
        score += CATEGORY_MATCH;
    }
    if entry.tags.iter().any(|t| t.to_lowercase().contains(term)) {
        score += TAG_MATCH;
    }
    if entry.description.to_lowercase().contains(term) {
        score += DESCRIPTION_MATCH;
    }
    score
}

/// Searches [`CONTENT`].
#[must_use]
pub fn search(query: &str) -> SearchResults {
    search_in(CONTENT, query)
}

/// Searches an arbitrary catalog.
#[must_use]
pub fn search_in(catalog: &'static [ContentEntry], query: &str) -> SearchResults {
    let query = query.trim().to_string();
    if query.is_empty() {
        return SearchResults {
            query,
            hits: Vec::new(),
        };
    }

    let term = query.to_lowercase();
    let mut hits: Vec<SearchHit> = catalog
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &term);
            (score > 0).then_some(SearchHit { entry, score })
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(query = %query, hits = hits.len(), "search");
    SearchResults { query, hits }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    hits: Vec<SearchHit>,
}

impl SearchResults {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Hits of the given kind in the requested order.
    #[must_use]
    pub fn view(&self, filter: KindFilter, sort: SortBy) -> Vec<&SearchHit> {
        let mut hits: Vec<&SearchHit> = self
            .hits
            .iter()
            .filter(|hit| filter.matches(hit.entry.kind))
            .collect();

        match sort {
            SortBy::Relevance => hits.sort_by(|a, b| b.score.cmp(&a.score)),
            SortBy::Date => hits.sort_by(|a, b| compare_dates_desc(a.entry, b.entry)),
            SortBy::Title => hits.sort_by(|a, b| {
                a.entry
                    .title
                    .to_lowercase()
                    .cmp(&b.entry.title.to_lowercase())
            }),
        }
        hits
    }

    /// `All` first, then each kind present in the results, with counts.
    #[must_use]
    pub fn kind_counts(&self) -> Vec<(KindFilter, usize)> {
        let mut counts = vec![(KindFilter::All, self.hits.len())];
        for kind in ContentKind::ALL {
            let count = self.hits.iter().filter(|h| h.entry.kind == kind).count();
            if count > 0 {
                counts.push((KindFilter::Only(kind), count));
            }
        }
        counts
    }

    /// Message for the empty state, `None` when there are hits.
    #[must_use]
    pub fn empty_message(&self) -> Option<String> {
        if !self.hits.is_empty() {
            None
        } else if self.query.is_empty() {
            Some("Start searching".to_string())
        } else {
            Some(format!("No results found for \"{}\"", self.query))
        }
    }
}

fn parse_date(entry: &ContentEntry) -> Option<NaiveDate> {
    entry
        .date
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Newest first; undated entries sort last.
fn compare_dates_desc(a: &ContentEntry, b: &ContentEntry) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
