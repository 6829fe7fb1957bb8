use std::fmt;
use thiserror::Error;

/// Position of a node in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl From<roxmltree::TextPos> for Location {
    fn from(pos: roxmltree::TextPos) -> Self {
        Self { line: pos.row as usize, col: pos.col as usize }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

/// Errors raised while reading a Jelly view.
#[derive(Error, Debug)]
pub enum JellyError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Duplicate prefix '{prefix}' with different URI: '{existing}' and '{conflicting}'")]
    DuplicatePrefix {
        prefix: String,
        existing: String,
        conflicting: String,
    },

    #[error("Namespace '{uri}' is bound to both '{existing}' and '{conflicting}'")]
    DuplicateNamespace {
        uri: String,
        existing: String,
        conflicting: String,
    },

    #[error("Missing required attribute '{attribute}' on <{tag}> at {location}")]
    MissingAttribute {
        attribute: String,
        tag: String,
        location: Location,
    },

    #[error("Namespace '{0}' was never declared")]
    UnresolvedNamespace(String),

    #[error("Wrapper element <{0}> has no child element to convert")]
    EmptyDocument(String),
}
