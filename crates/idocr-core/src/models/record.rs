//! Structured record produced from identity document text.

use serde::{Deserialize, Serialize};

/// Fields extracted from an identity document.
///
/// Every field defaults to the empty string; an empty value means the
/// corresponding rule found no match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedRecord {
    /// 12-digit identifier printed as three groups of four digits.
    pub identifier_number: String,

    /// Holder's name.
    pub name: String,

    /// Name following an S/o, C/o or D/o prefix.
    pub guardian_name: String,

    /// Date of birth, `/`-separated.
    pub date_of_birth: String,

    /// Gender token as printed, capitalized.
    pub gender: String,

    /// Free-form address line.
    pub address: String,

    /// Village/Town/City (VTC).
    pub village_or_town: String,

    /// Post office (PO).
    pub post_office: String,

    /// Sub district.
    pub sub_district: String,

    /// District.
    pub district: String,

    /// State.
    pub state: String,

    /// 6-digit postal code.
    pub postal_code: String,

    /// 10-digit phone number.
    pub phone_number: String,
}

impl ExtractedRecord {
    /// Field names in serialization order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "identifier_number",
        "name",
        "guardian_name",
        "date_of_birth",
        "gender",
        "address",
        "village_or_town",
        "post_office",
        "sub_district",
        "district",
        "state",
        "postal_code",
        "phone_number",
    ];

    /// Field name and value pairs in serialization order.
    pub fn fields(&self) -> [(&'static str, &str); 13] {
        [
            ("identifier_number", self.identifier_number.as_str()),
            ("name", self.name.as_str()),
            ("guardian_name", self.guardian_name.as_str()),
            ("date_of_birth", self.date_of_birth.as_str()),
            ("gender", self.gender.as_str()),
            ("address", self.address.as_str()),
            ("village_or_town", self.village_or_town.as_str()),
            ("post_office", self.post_office.as_str()),
            ("sub_district", self.sub_district.as_str()),
            ("district", self.district.as_str()),
            ("state", self.state.as_str()),
            ("postal_code", self.postal_code.as_str()),
            ("phone_number", self.phone_number.as_str()),
        ]
    }

    /// Names of fields that were left empty.
    pub fn missing_fields(&self) -> Vec<String> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Check if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Format the address components as a single comma-separated line.
    pub fn format_address(&self) -> String {
        [
            self.address.as_str(),
            self.village_or_town.as_str(),
            self.post_office.as_str(),
            self.sub_district.as_str(),
            self.district.as_str(),
            self.state.as_str(),
            self.postal_code.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let record = ExtractedRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.missing_fields().len(), 13);
    }

    #[test]
    fn test_serializes_all_keys() {
        let record = ExtractedRecord {
            gender: "Male".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 13);
        for name in ExtractedRecord::FIELD_NAMES {
            assert!(object.contains_key(name), "missing key {name}");
        }
        assert_eq!(object["gender"], "Male");
        assert_eq!(object["name"], "");
    }

    #[test]
    fn test_deserializes_partial_object() {
        let record: ExtractedRecord =
            serde_json::from_str(r#"{"name":"Ram Kumar"}"#).unwrap();
        assert_eq!(record.name, "Ram Kumar");
        assert!(record.state.is_empty());
    }

    #[test]
    fn test_format_address() {
        let record = ExtractedRecord {
            address: "12 Main Road".to_string(),
            district: "Pune".to_string(),
            postal_code: "411001".to_string(),
            ..Default::default()
        };
        assert_eq!(record.format_address(), "12 Main Road, Pune, 411001");
    }
}
