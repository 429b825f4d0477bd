use std::fmt;

/// One element of a sequence expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// An explicit integer term.
    Int(i64),
    /// The `..` marker: continue the inferred pattern here.
    Gap,
    /// Anything else, kept verbatim for diagnostics.
    Other(String),
}

/// The kind of an [`Item`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Int,
    Gap,
    Other,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Int(_) => ItemKind::Int,
            Item::Gap => ItemKind::Gap,
            Item::Other(_) => ItemKind::Other,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(n) => write!(f, "{n}"),
            Item::Gap => write!(f, ".."),
            Item::Other(s) => write!(f, "{s}"),
        }
    }
}
