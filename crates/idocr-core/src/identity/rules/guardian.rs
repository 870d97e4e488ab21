//! Guardian name extraction (`S/o`, `C/o`, `D/o` prefixes).

use std::borrow::Cow;

use super::patterns::GUARDIAN;
use super::{capture_all, ExtractionMatch, FieldExtractor};

/// Guardian name extractor.
///
/// The name is the run of letters and whitespace after the prefix, so it may
/// continue onto the next line when the prefix line ends without punctuation.
pub struct GuardianExtractor;

impl GuardianExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GuardianExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GuardianExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        GUARDIAN
            .captures(text)
            .and_then(|caps| ExtractionMatch::from_group(&caps, 2))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        capture_all(&GUARDIAN, text, 2)
    }
}

/// Extract the guardian and derive a working copy of `text` without it.
///
/// Every occurrence of the matched span (prefix and name) is erased from the
/// copy. The input is borrowed unchanged when no guardian is present.
pub fn strip_guardian(text: &str) -> (Option<ExtractionMatch<String>>, Cow<'_, str>) {
    match GuardianExtractor::new().extract(text) {
        Some(guardian) => {
            let stripped = text.replace(guardian.source.as_str(), "");
            (Some(guardian), Cow::Owned(stripped))
        }
        None => (None, Cow::Borrowed(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_guardian() {
        let extractor = GuardianExtractor::new();
        let result = extractor.extract("S/o Ram Kumar").unwrap();
        assert_eq!(result.value, "Ram Kumar");
        assert_eq!(result.source, "S/o Ram Kumar");
    }

    #[test]
    fn test_prefix_variants() {
        let extractor = GuardianExtractor::new();
        assert_eq!(extractor.extract("C/O: Sita Devi, 12").unwrap().value, "Sita Devi");
        assert_eq!(extractor.extract("d/o. Mohan Lal,").unwrap().value, "Mohan Lal");
        assert_eq!(extractor.extract("S/OHari Singh").unwrap().value, "Hari Singh");
    }

    #[test]
    fn test_stops_at_punctuation() {
        let extractor = GuardianExtractor::new();
        let result = extractor.extract("Address: S/O Shyam Lal, House 12").unwrap();
        assert_eq!(result.value, "Shyam Lal");
        assert_eq!(result.source, "S/O Shyam Lal");
    }

    #[test]
    fn test_strip_guardian() {
        let text = "Address: S/O Shyam Lal, House 12";
        let (guardian, stripped) = strip_guardian(text);

        assert_eq!(guardian.unwrap().value, "Shyam Lal");
        assert_eq!(stripped, "Address: , House 12");
    }

    #[test]
    fn test_strip_without_guardian_borrows() {
        let (guardian, stripped) = strip_guardian("Address: House 12");
        assert!(guardian.is_none());
        assert!(matches!(stripped, Cow::Borrowed("Address: House 12")));
    }
}
