//! Error and diagnostic types.

use thiserror::Error;

use crate::section::SectionIndex;

/// A caller-supplied input that breaks the accordion's contract.
///
/// These are reported rather than raised: rendering always proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// An active index does not name any section.
    #[error("active section {index} is out of range for {section_count} sections")]
    IndexOutOfRange {
        index: SectionIndex,
        section_count: usize,
    },

    /// The same index appears more than once in the active set.
    #[error("active section {0} is listed more than once")]
    DuplicateIndex(SectionIndex),

    /// Single-expand mode was given several active sections.
    #[error("{count} active sections supplied while expandMultiple is off")]
    MultipleActiveInSingleMode { count: usize },
}

/// Errors from the string-keyed option setter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: &'static str, value: String },

    #[error("unknown {option} '{value}'")]
    UnknownKeyword { option: &'static str, value: String },

    /// Sections and callbacks can't be expressed as strings.
    #[error("option '{0}' can only be set through the typed builder")]
    NotStringSettable(String),
}
