//! Date of birth extraction.

use super::patterns::DATE_OF_BIRTH;
use super::{ExtractionMatch, FieldExtractor};

/// Labeled date of birth extractor (`DOB`, `Date of Birth`, `D.O.B`).
///
/// The date is kept as printed apart from `-` separators, which become `/`.
/// No calendar validation is done.
pub struct DateOfBirthExtractor;

impl DateOfBirthExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateOfBirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateOfBirthExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_OF_BIRTH
            .captures_iter(text)
            .filter_map(|caps| ExtractionMatch::from_group(&caps, 2))
            .map(|mut m| {
                m.value = normalize_date(&m.value);
                m
            })
            .collect()
    }
}

/// Normalize date separators to `/`.
pub fn normalize_date(date: &str) -> String {
    date.replace('-', "/")
}
