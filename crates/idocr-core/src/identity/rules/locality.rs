//! Labeled locality fields (VTC, PO, Sub District, District, State).

use regex::Regex;

use super::patterns::{DISTRICT, POST_OFFICE, STATE, SUB_DISTRICT, VTC};
use super::{capture_all, ExtractionMatch, FieldExtractor};

/// A labeled locality field whose value runs to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalityField {
    /// Village/Town/City (`VTC`).
    VillageOrTown,
    /// Post office (`PO`).
    PostOffice,
    /// `Sub District`.
    SubDistrict,
    /// `District`.
    District,
    /// `State`.
    State,
}

impl LocalityField {
    pub const ALL: [LocalityField; 5] = [
        LocalityField::VillageOrTown,
        LocalityField::PostOffice,
        LocalityField::SubDistrict,
        LocalityField::District,
        LocalityField::State,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            LocalityField::VillageOrTown => &*VTC,
            LocalityField::PostOffice => &*POST_OFFICE,
            LocalityField::SubDistrict => &*SUB_DISTRICT,
            LocalityField::District => &*DISTRICT,
            LocalityField::State => &*STATE,
        }
    }
}

/// Extractor for a single locality field.
///
/// Labels are matched anywhere, without a word boundary, so `District` also
/// hits inside `Sub District` and `PO` inside longer words.
pub struct LocalityExtractor {
    field: LocalityField,
}

impl LocalityExtractor {
    pub fn new(field: LocalityField) -> Self {
        Self { field }
    }
}

impl FieldExtractor for LocalityExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.field
            .pattern()
            .captures(text)
            .and_then(|caps| ExtractionMatch::from_group(&caps, 1))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        capture_all(self.field.pattern(), text, 1)
    }
}

/// Locality fields found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locality {
    pub village_or_town: String,
    pub post_office: String,
    pub sub_district: String,
    pub district: String,
    pub state: String,
}

/// Extract every locality field from text; unmatched fields stay empty.
pub fn extract_locality(text: &str) -> Locality {
    let mut locality = Locality::default();

    for field in LocalityField::ALL {
        let value = LocalityExtractor::new(field)
            .extract(text)
            .map(|m| m.value)
            .unwrap_or_default();

        match field {
            LocalityField::VillageOrTown => locality.village_or_town = value,
            LocalityField::PostOffice => locality.post_office = value,
            LocalityField::SubDistrict => locality.sub_district = value,
            LocalityField::District => locality.district = value,
            LocalityField::State => locality.state = value,
        }
    }

    locality
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_locality() {
        let text = "VTC: Hadapsar\nPO: Hadapsar\nSub District: Haveli\nDistrict: Pune\nState: Maharashtra";
        let locality = extract_locality(text);

        assert_eq!(locality.village_or_town, "Hadapsar");
        assert_eq!(locality.post_office, "Hadapsar");
        assert_eq!(locality.sub_district, "Haveli");
        // First "District" label is the one inside "Sub District"
        assert_eq!(locality.district, "Haveli");
        assert_eq!(locality.state, "Maharashtra");
    }

    #[test]
    fn test_value_trimmed_to_end_of_line() {
        let extractor = LocalityExtractor::new(LocalityField::State);
        assert_eq!(extractor.extract("state :  Kerala  \nPIN 682001").unwrap().value, "Kerala");
    }

    #[test]
    fn test_label_may_cross_line_break() {
        let extractor = LocalityExtractor::new(LocalityField::VillageOrTown);
        assert_eq!(extractor.extract("VTC:\nKochi").unwrap().value, "Kochi");
    }

    #[test]
    fn test_missing_label() {
        let locality = extract_locality("nothing here");
        assert_eq!(locality, Locality::default());
    }
}
