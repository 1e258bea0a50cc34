//! Free-text supplier resolution and autocomplete suggestions.

use crate::directory::SupplierDirectory;
use log::debug;

/// Outcome of resolving free-form supplier input against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact match ignoring case; carries the canonical directory name.
    Resolved(String),

    /// Substring matches, in directory order.
    Candidates(Vec<String>),

    /// Nothing matched; callers treat the query as a custom supplier name.
    NotFound,
}

/// A fuzzy autocomplete suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub score: f64,
}

impl SupplierDirectory {
    /// Resolve free-form input to a directory entry.
    ///
    /// An empty query never matches. Exact matching ignores case and wins
    /// over substring matching; substring matching is not anchored at word
    /// boundaries ("go" matches both "Google" and "Algorithm Co").
    #[must_use]
    pub fn resolve(&self, query: &str) -> Resolution {
        if query.is_empty() {
            return Resolution::NotFound;
        }

        let folded = query.to_lowercase();
        for name in self.names() {
            if name.to_lowercase() == folded {
                debug!("resolved '{query}' to '{name}'");
                return Resolution::Resolved(name.to_string());
            }
        }

        let candidates: Vec<String> = self
            .names()
            .filter(|name| name.to_lowercase().contains(&folded))
            .map(ToString::to_string)
            .collect();

        if candidates.is_empty() {
            debug!("no directory match for '{query}'");
            Resolution::NotFound
        } else {
            Resolution::Candidates(candidates)
        }
    }

    /// Rank fuzzy autocomplete suggestions for a partial or misspelled query.
    ///
    /// Scores are Jaro-Winkler similarity between the lowercased query and
    /// each lowercased name; anything below 0.7 is dropped. Equal scores keep
    /// directory order.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        const FLOOR: f64 = 0.7;

        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let folded = query.to_lowercase();
        let mut suggestions: Vec<Suggestion> = self
            .names()
            .filter_map(|name| {
                let score = strsim::jaro_winkler(&folded, &name.to_lowercase());
                (score >= FLOOR).then(|| Suggestion {
                    name: name.to_string(),
                    score,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(core::cmp::Ordering::Equal));
        suggestions.truncate(limit);
        suggestions
    }
}
