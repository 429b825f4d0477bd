//! Narrow client interface to an integer-sequence catalogue.
//!
//! The catalogue is an external, swappable service: terms in, candidate
//! sequences out. [`StaticCatalog`] is the built-in offline backend, a small
//! table of well-known sequences for exercising the interface without any
//! network access.

use anyhow::{Result, bail};
use phf::{Map, phf_map};

/// One candidate sequence returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Human-readable name, e.g. "The positive integers".
    pub name: String,
    /// Canonical identifier, e.g. "A000027".
    pub id: String,
    /// The known terms the catalogue carries for this sequence (bounded).
    pub terms: Vec<i64>,
    /// Classification keywords, e.g. "core".
    pub keywords: Vec<String>,
    /// Alternate identifiers from older catalogues.
    pub alt_ids: Vec<String>,
    /// Attribution string.
    pub author: String,
}

impl Candidate {
    /// The first `n` known terms (fewer if the entry is shorter).
    pub fn leading(&self, n: usize) -> &[i64] {
        &self.terms[..self.terms.len().min(n)]
    }
}

/// A terms-in, candidates-out sequence lookup backend.
pub trait SequenceLookup {
    /// Return the candidate sequences matching `terms`, ordered by
    /// canonical identifier. At least one term is required.
    fn lookup_by_terms(&self, terms: &[i64]) -> Result<Vec<Candidate>>;
}

struct CatalogEntry {
    name: &'static str,
    terms: &'static [i64],
    keywords: &'static [&'static str],
    alt_ids: &'static [&'static str],
    author: &'static str,
}

/// Built-in entries, keyed by canonical identifier. Please keep the keys
/// sorted for readability.
const CATALOG: Map<&'static str, CatalogEntry> = phf_map! {
    "A000027" => CatalogEntry {
        name: "The positive integers",
        terms: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18],
        keywords: &["core", "easy", "nonn"],
        alt_ids: &["M0472", "N0173"],
        author: "_N. J. A. Sloane_",
    },
    "A000040" => CatalogEntry {
        name: "The prime numbers",
        terms: &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53],
        keywords: &["core", "nonn"],
        alt_ids: &["M0652", "N0241"],
        author: "_N. J. A. Sloane_",
    },
    "A000045" => CatalogEntry {
        name: "Fibonacci numbers",
        terms: &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610],
        keywords: &["core", "nonn"],
        alt_ids: &["M0692", "N0256"],
        author: "_N. J. A. Sloane_",
    },
    "A000290" => CatalogEntry {
        name: "The squares",
        terms: &[0, 1, 4, 9, 16, 25, 36, 49, 64, 81, 100, 121, 144, 169, 196],
        keywords: &["core", "easy", "nonn"],
        alt_ids: &["M3356", "N1350"],
        author: "_N. J. A. Sloane_",
    },
    "A005408" => CatalogEntry {
        name: "The odd numbers",
        terms: &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29, 31],
        keywords: &["core", "easy", "nonn"],
        alt_ids: &["M2400"],
        author: "_N. J. A. Sloane_",
    },
    "A005843" => CatalogEntry {
        name: "The nonnegative even numbers",
        terms: &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        keywords: &["core", "easy", "nonn"],
        alt_ids: &["M0985"],
        author: "_N. J. A. Sloane_",
    },
};

/// The built-in offline catalogue backend.
///
/// Matches when the query terms occur as a contiguous run anywhere in an
/// entry's known terms, so both a prefix query and a mid-sequence query
/// find their sequence.
pub struct StaticCatalog;

impl SequenceLookup for StaticCatalog {
    fn lookup_by_terms(&self, terms: &[i64]) -> Result<Vec<Candidate>> {
        if terms.is_empty() {
            bail!("Sequence lookup requires at least one term.");
        }
        let mut found: Vec<Candidate> = CATALOG
            .entries()
            .filter(|(_, entry)| {
                entry.terms.windows(terms.len()).any(|run| run == terms)
            })
            .map(|(id, entry)| Candidate {
                name: entry.name.to_string(),
                id: id.to_string(),
                terms: entry.terms.to_vec(),
                keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
                alt_ids: entry.alt_ids.iter().map(|a| a.to_string()).collect(),
                author: entry.author.to_string(),
            })
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_query() {
        let found = StaticCatalog.lookup_by_terms(&[1, 2, 3, 4]).unwrap();
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A000027"]);
        assert_eq!(found[0].name, "The positive integers");
        assert_eq!(found[0].leading(6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(found[0].author, "_N. J. A. Sloane_");
    }

    #[test]
    fn mid_sequence_query() {
        let found = StaticCatalog.lookup_by_terms(&[3, 5, 8, 13]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "A000045");
    }

    #[test]
    fn ambiguous_query_is_ordered_by_id() {
        let found = StaticCatalog.lookup_by_terms(&[1, 2, 3]).unwrap();
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A000027", "A000045"]);
    }

    #[test]
    fn no_match() {
        let found = StaticCatalog.lookup_by_terms(&[4, 8, 15, 16, 23]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn empty_query_is_an_error() {
        assert!(StaticCatalog.lookup_by_terms(&[]).is_err());
    }

    #[test]
    fn leading_is_bounded_by_known_terms() {
        let found = StaticCatalog.lookup_by_terms(&[2, 4, 6]).unwrap();
        assert_eq!(found[0].id, "A005843");
        assert_eq!(found[0].leading(100).len(), found[0].terms.len());
    }
}
