//! Error handling for the school simulation.

use std::{fmt, io};

/// Kind of entity a name refers to, used in lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A student
    Student,
    /// A teacher
    Teacher,
    /// A parent
    Parent,
    /// A lesson
    Lesson,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Lesson => "lesson",
        };
        f.write_str(label)
    }
}

/// Specialized error type for school operations
#[derive(Debug, thiserror::Error)]
pub enum SchoolError {
    /// No entity of the given kind carries this name
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// Kind of entity that was looked up
        kind: EntityKind,
        /// Name that failed to resolve
        name: String,
    },

    /// An entity of the same kind already carries this name
    #[error("{kind} '{name}' already exists")]
    DuplicateName {
        /// Kind of entity being added
        kind: EntityKind,
        /// Name that is already taken
        name: String,
    },

    /// The student exists but is not among the parent's children
    #[error("'{child}' is not a child of parent '{parent}'")]
    NotAChild {
        /// Parent name
        parent: String,
        /// Requested child name
        child: String,
    },

    /// The parent has no children to report on
    #[error("parent '{0}' has no children")]
    NoChildren(String),

    /// Grade outside the 1..=5 scale
    #[error("invalid grade {0}, expected a value between 1 and 5")]
    InvalidGrade(u8),

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error reading a scenario or configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding a scenario or configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchoolError {
    /// Create a `NotFound` error for the given kind and name
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Whether this error is a failed name lookup
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for school operations
pub type Result<T> = std::result::Result<T, SchoolError>;
