//! Common regex patterns for identity document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Identifier: three space-separated groups of four digits
    pub static ref IDENTIFIER_NUMBER: Regex = Regex::new(
        r"\b(\d{4}\s\d{4}\s\d{4})\b"
    ).unwrap();

    // Guardian prefix followed by a run of letters/whitespace
    pub static ref GUARDIAN: Regex = Regex::new(
        r"(?i)(S/o|C/o|D/o)[.:]?\s*([A-Za-z\s]+)"
    ).unwrap();

    pub static ref GUARDIAN_PREFIX: Regex = Regex::new(
        r"(?i)(S/o|C/o|D/o)"
    ).unwrap();

    // A line made of letters and whitespace only
    pub static ref NAME_LINE: Regex = Regex::new(
        r"^[A-Za-z\s]+$"
    ).unwrap();

    // Labeled date of birth
    pub static ref DATE_OF_BIRTH: Regex = Regex::new(
        r"(?i)(DOB|Date of Birth|D\.O\.B)[:\s]*?(\d{1,2}[/-]\d{1,2}[/-]\d{4})"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)\b(Male|Female|Transgender|M|F|T)\b"
    ).unwrap();

    // Address label and the line that ends the address block
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?i)address[:\s]*"
    ).unwrap();

    pub static ref ADDRESS_STOP: Regex = Regex::new(
        r"(?i)\n(?:VTC|PO|Sub District|District|State|\d{6}|VID|Digitally)"
    ).unwrap();

    // Address cleanup
    pub static ref ADDRESS_LABELED_FIELD: Regex = Regex::new(
        r"(?i)\b(VTC|PO|Sub District|District|State|\d{6})[:\s]*.*"
    ).unwrap();

    pub static ref ADDRESS_DIST_STATE: Regex = Regex::new(
        r"(?i)\b(dist|state)\b.*"
    ).unwrap();

    pub static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Labeled locality fields (value runs to end of line)
    pub static ref VTC: Regex = Regex::new(r"(?i)VTC[:\s]*(.*)").unwrap();

    pub static ref POST_OFFICE: Regex = Regex::new(r"(?i)PO[:\s]*(.*)").unwrap();

    pub static ref SUB_DISTRICT: Regex = Regex::new(r"(?i)Sub District[:\s]*(.*)").unwrap();

    pub static ref DISTRICT: Regex = Regex::new(r"(?i)District[:\s]*(.*)").unwrap();

    pub static ref STATE: Regex = Regex::new(r"(?i)State[:\s]*(.*)").unwrap();

    // Bare digit runs
    pub static ref POSTAL_CODE: Regex = Regex::new(r"\b(\d{6})\b").unwrap();

    pub static ref PHONE: Regex = Regex::new(r"\b(\d{10})\b").unwrap();
}
