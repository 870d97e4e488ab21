//! Rule-based field extractors for identity documents.

pub mod address;
pub mod dates;
pub mod gender;
pub mod guardian;
pub mod identifier;
pub mod locality;
pub mod name;
pub mod numbers;
pub mod patterns;

pub use address::{clean_address, AddressExtractor};
pub use dates::DateOfBirthExtractor;
pub use gender::GenderExtractor;
pub use guardian::{strip_guardian, GuardianExtractor};
pub use identifier::IdentifierExtractor;
pub use locality::{extract_locality, Locality, LocalityField, LocalityExtractor};
pub use name::NameExtractor;
pub use numbers::DigitRunExtractor;
pub use patterns::*;

use regex::{Captures, Regex};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A field value together with the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range of the full match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

impl ExtractionMatch<String> {
    /// Build a match from capture group `group` of `caps`, trimming the value.
    pub(crate) fn from_group(caps: &Captures<'_>, group: usize) -> Option<Self> {
        let full = caps.get(0)?;
        let value = caps.get(group)?.as_str().trim().to_string();
        Some(Self::new(value, full.as_str()).with_position(full.start(), full.end()))
    }
}

/// Collect trimmed capture group `group` for every match of `pattern`.
pub(crate) fn capture_all(
    pattern: &Regex,
    text: &str,
    group: usize,
) -> Vec<ExtractionMatch<String>> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| ExtractionMatch::from_group(&caps, group))
        .collect()
}
