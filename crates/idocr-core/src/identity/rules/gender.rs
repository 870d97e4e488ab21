//! Gender extraction.

use super::patterns::GENDER;
use super::{ExtractionMatch, FieldExtractor};

/// Gender extractor.
///
/// Accepts full words and single-letter codes as standalone tokens and keeps
/// the token as printed, capitalized (`MALE` -> `Male`, `f` -> `F`).
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GENDER
            .captures_iter(text)
            .filter_map(|caps| ExtractionMatch::from_group(&caps, 1))
            .map(|mut m| {
                m.value = capitalize(&m.value);
                m
            })
            .collect()
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_word() {
        let extractor = GenderExtractor::new();
        assert_eq!(extractor.extract("Female").unwrap().value, "Female");
        assert_eq!(extractor.extract("Sex: MALE").unwrap().value, "Male");
        assert_eq!(extractor.extract("transgender").unwrap().value, "Transgender");
    }

    #[test]
    fn test_single_letter() {
        let extractor = GenderExtractor::new();
        assert_eq!(extractor.extract("F").unwrap().value, "F");
        assert_eq!(extractor.extract("Sex: m").unwrap().value, "M");
    }

    #[test]
    fn test_letter_inside_word_ignored() {
        let extractor = GenderExtractor::new();
        assert!(extractor.extract("Mumbai Fort").is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fEMALE"), "Female");
        assert_eq!(capitalize(""), "");
    }
}
