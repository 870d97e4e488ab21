//! Postal code and phone number extraction (bare digit runs).

use regex::Regex;

use super::patterns::{PHONE, POSTAL_CODE};
use super::{capture_all, ExtractionMatch, FieldExtractor};

/// Extractor for a standalone run of a fixed number of digits.
///
/// Any run of the right length anywhere in the text qualifies, so a numeric
/// fragment of an address can be picked up as well.
pub struct DigitRunExtractor {
    pattern: &'static Regex,
}

impl DigitRunExtractor {
    pub fn new(pattern: &'static Regex) -> Self {
        Self { pattern }
    }

    /// 6-digit postal code.
    pub fn postal_code() -> Self {
        Self::new(&*POSTAL_CODE)
    }

    /// 10-digit phone number.
    pub fn phone_number() -> Self {
        Self::new(&*PHONE)
    }
}

impl FieldExtractor for DigitRunExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern
            .captures(text)
            .and_then(|caps| ExtractionMatch::from_group(&caps, 1))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        capture_all(self.pattern, text, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code() {
        let extractor = DigitRunExtractor::postal_code();
        assert_eq!(extractor.extract("Pune - 411001").unwrap().value, "411001");
        assert!(extractor.extract("4110012").is_none());
    }

    #[test]
    fn test_phone_number() {
        let extractor = DigitRunExtractor::phone_number();
        assert_eq!(extractor.extract("Mobile: 9876543210").unwrap().value, "9876543210");
        assert!(extractor.extract("+91 98765 43210").is_none());
    }

    #[test]
    fn test_identifier_groups_not_postal_code() {
        assert!(DigitRunExtractor::postal_code().extract("1234 5678 9012").is_none());
    }
}
