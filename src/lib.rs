//! Integer sequence notation with a "continue the pattern" gap marker.
//!
//! A sequence expression is a short comma-separated list of terms with a
//! `..` marker standing for "continue the inferred pattern here", e.g.
//! `1, 2, .., 9`. Classifying an expression partitions its items by kind
//! and collects the contiguous integer runs on either side of each gap
//! marker, ready for a caller to infer a generating rule from.
//!
//! Unrecognised runs can be cross-referenced against a sequence catalogue
//! through the [`SequenceLookup`] trait; [`StaticCatalog`] is a small
//! built-in offline backend.
//!
//! # Example
//!
//! ```rust
//! use dotdot::{classify, parse_expr};
//!
//! let items = parse_expr("1, 2, .., 5, 6").unwrap();
//! let runs = classify(&items);
//!
//! assert_eq!(runs.before(), &[1, 2]);
//! assert_eq!(runs.after(), &[5, 6]);
//! ```

mod classify;
mod item;
mod lookup;
mod parse;
mod partition;

pub use classify::{Classification, GapRuns, classify};
pub use item::{Item, ItemKind};
pub use lookup::{Candidate, SequenceLookup, StaticCatalog};
pub use parse::{ExprError, parse_expr};
pub use partition::Partition;
