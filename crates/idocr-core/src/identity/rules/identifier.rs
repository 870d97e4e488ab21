//! Identifier number extraction (`dddd dddd dddd`).

use super::patterns::IDENTIFIER_NUMBER;
use super::{capture_all, ExtractionMatch, FieldExtractor};

/// Identifier number extractor.
///
/// Only the digit grouping is checked; no checksum is validated.
pub struct IdentifierExtractor;

impl IdentifierExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdentifierExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        IDENTIFIER_NUMBER
            .captures(text)
            .and_then(|caps| ExtractionMatch::from_group(&caps, 1))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        capture_all(&IDENTIFIER_NUMBER, text, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_identifier() {
        let extractor = IdentifierExtractor::new();
        let result = extractor.extract("1234 5678 9012").unwrap();
        assert_eq!(result.value, "1234 5678 9012");
        assert_eq!(result.position, Some((0, 14)));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let extractor = IdentifierExtractor::new();
        let text = "Your number\n2345 6789 0123\nVID: 9999 8888 7777 6666";
        assert_eq!(extractor.extract(text).unwrap().value, "2345 6789 0123");
        assert_eq!(extractor.extract_all(text).len(), 2);
    }

    #[test]
    fn test_rejects_ungrouped_digits() {
        let extractor = IdentifierExtractor::new();
        assert!(extractor.extract("123456789012").is_none());
        assert!(extractor.extract("12345 5678 9012").is_none());
    }
}
