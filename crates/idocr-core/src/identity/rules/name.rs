//! Holder name extraction.

use super::patterns::{GUARDIAN_PREFIX, NAME_LINE};
use super::{ExtractionMatch, FieldExtractor};

/// Holder name extractor.
///
/// Picks the first trimmed line made only of letters and whitespace with at
/// least two words. Header lines such as "Government of India" qualify too;
/// OCR output rarely gives a better anchor.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_name_line(line: &str) -> bool {
        NAME_LINE.is_match(line)
            && line.split_whitespace().count() > 1
            && !GUARDIAN_PREFIX.is_match(line)
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        let mut offset = 0;

        for raw_line in text.split('\n') {
            let line_start = offset;
            offset += raw_line.len() + 1;

            let line = raw_line.trim();
            if line.is_empty() || !Self::is_name_line(line) {
                continue;
            }

            let start = line_start + (raw_line.len() - raw_line.trim_start().len());
            results.push(
                ExtractionMatch::new(line.to_string(), line).with_position(start, start + line.len()),
            );
        }

        results
    }
}
