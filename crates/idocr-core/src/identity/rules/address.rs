//! Free-form address extraction.

use super::patterns::{
    ADDRESS_DIST_STATE, ADDRESS_LABEL, ADDRESS_LABELED_FIELD, ADDRESS_STOP, GUARDIAN,
    IDENTIFIER_NUMBER, NEWLINES, WHITESPACE,
};
use super::{ExtractionMatch, FieldExtractor};

/// Address extractor.
///
/// Captures the text after an `address` label up to the first line that
/// starts with a locality label (`VTC`, `PO`, `Sub District`, `District`,
/// `State`), a 6-digit run, `VID` or `Digitally`, then strips the fields that
/// other rules report on their own.
///
/// Run it on text that already had the guardian span removed (see
/// [`strip_guardian`](super::strip_guardian)).
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Raw address block following the label match that ends at `value_start`.
    fn capture_block(text: &str, value_start: usize) -> (usize, usize) {
        let end = ADDRESS_STOP
            .find_at(text, value_start)
            .map(|stop| stop.start())
            .unwrap_or(text.len());
        (value_start, end)
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ADDRESS_LABEL
            .find_iter(text)
            .map(|label| {
                let (start, end) = Self::capture_block(text, label.end());
                let block = &text[start..end];
                ExtractionMatch::new(clean_address(block), block).with_position(label.start(), end)
            })
            .collect()
    }
}

/// Clean a raw address block into a single line.
///
/// Removes guardian prefixes with their names, grouped identifier numbers,
/// labeled locality fields and 6-digit runs (through end of line), anything
/// from a standalone `dist`/`state` word onwards, then collapses whitespace.
pub fn clean_address(block: &str) -> String {
    let address = block.trim();
    let address = GUARDIAN.replace_all(address, "");
    let address = IDENTIFIER_NUMBER.replace_all(&address, "");
    let address = ADDRESS_LABELED_FIELD.replace_all(&address, "");
    let address = ADDRESS_DIST_STATE.replace_all(&address, "");
    let address = NEWLINES.replace_all(&address, " ");
    let address = WHITESPACE.replace_all(address.trim(), " ");
    address.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_before_locality_line() {
        let extractor = AddressExtractor::new();
        let text = "Address: 123 Main St\nPO: Central\nDistrict: X";
        assert_eq!(extractor.extract(text).unwrap().value, "123 Main St");
    }

    #[test]
    fn test_multiline_block_collapsed() {
        let extractor = AddressExtractor::new();
        let text = "Address:\nHouse No 12,\n  Gandhi   Nagar,\nNear Temple\nVTC: Hadapsar";
        assert_eq!(
            extractor.extract(text).unwrap().value,
            "House No 12, Gandhi Nagar, Near Temple"
        );
    }

    #[test]
    fn test_runs_to_end_without_stop_line() {
        let extractor = AddressExtractor::new();
        let text = "ADDRESS 7 Lake View Road\nBlock B\n";
        assert_eq!(extractor.extract(text).unwrap().value, "7 Lake View Road Block B");
    }

    #[test]
    fn test_stop_line_with_pincode() {
        let extractor = AddressExtractor::new();
        let text = "Address: Flat 4, MG Road\n560001\nVID: 1234";
        assert_eq!(extractor.extract(text).unwrap().value, "Flat 4, MG Road");
    }

    #[test]
    fn test_inline_fields_removed() {
        let extractor = AddressExtractor::new();
        let text = "Address: 12 Park Lane, Dist Pune\nNear School, PIN 411001 extra\nVID: 1";
        assert_eq!(extractor.extract(text).unwrap().value, "12 Park Lane, Near School, PIN");
    }

    #[test]
    fn test_identifier_and_guardian_removed() {
        let cleaned = clean_address("C/O Ravi Shankar, 1234 5678 9012 Main Road");
        assert_eq!(cleaned, ", Main Road");
    }

    #[test]
    fn test_no_label() {
        assert!(AddressExtractor::new().extract("123 Main St").is_none());
    }
}
