//! Enquiry form validation.
//!
//! Pure checks, no side effects. Every field is checked independently so one
//! failure never hides another; the caller gets the full list of violations.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// E.164-style phone pattern: optional +, no leading zero, 2-15 digits.
    static ref PHONE_RE: Regex =
        Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern is a valid regex");
}

/// A lead enquiry as captured by the form and forwarded to the webhook.
///
/// Immutable once validated; ownership transfers to the spreadsheet webhook on
/// successful relay. Wire format is camelCase to match the form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub plot_size: String,
    pub city: String,
}

impl LeadSubmission {
    /// An empty submission: the form's default values.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            plot_size: String::new(),
            city: String::new(),
        }
    }
}

/// A single violated constraint, addressed to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check a candidate submission against the form constraints.
///
/// Returns the full list of violations; an empty list means the submission is
/// valid and may be dispatched.
pub fn validate(lead: &LeadSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if lead.name.chars().count() < 2 {
        errors.push(FieldError {
            field: "name",
            message: "Name must be at least 2 characters.",
        });
    }

    if !PHONE_RE.is_match(&lead.phone) {
        errors.push(FieldError {
            field: "phone",
            message: "Please enter a valid phone number.",
        });
    }

    if lead.address.chars().count() < 10 {
        errors.push(FieldError {
            field: "address",
            message: "Please enter a complete address.",
        });
    }

    if lead.plot_size.chars().count() < 2 {
        errors.push(FieldError {
            field: "plotSize",
            message: "Please enter plot size.",
        });
    }

    if lead.city.chars().count() < 2 {
        errors.push(FieldError {
            field: "city",
            message: "City is required.",
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Jo".to_string(),
            phone: "+919999999999".to_string(),
            address: "12 Example Street, City".to_string(),
            plot_size: "1500".to_string(),
            city: "Lucknow".to_string(),
        }
    }

    #[test]
    fn accepts_valid_lead() {
        assert!(validate(&valid_lead()).is_empty());
    }

    #[test]
    fn rejects_short_name() {
        let lead = LeadSubmission {
            name: "J".to_string(),
            ..valid_lead()
        };
        let errors = validate(&lead);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_invalid_phones() {
        for phone in [
            "",
            "abc",
            "0123456789",        // leading zero
            "+0123456789",       // leading zero after +
            "1",                 // too short
            "12345678901234567", // > 15 digits
            "+91 99999 99999",   // spaces
            "99999-99999",       // dashes
        ] {
            let lead = LeadSubmission {
                phone: phone.to_string(),
                ..valid_lead()
            };
            let errors = validate(&lead);
            assert!(
                errors.iter().any(|e| e.field == "phone"),
                "expected {:?} to be rejected",
                phone
            );
        }
    }

    #[test]
    fn accepts_valid_phones() {
        for phone in ["+919999999999", "919999999999", "+12", "15551234567"] {
            let lead = LeadSubmission {
                phone: phone.to_string(),
                ..valid_lead()
            };
            assert!(validate(&lead).is_empty(), "expected {:?} to pass", phone);
        }
    }

    #[test]
    fn rejects_short_address() {
        let lead = LeadSubmission {
            address: "12 Main".to_string(),
            ..valid_lead()
        };
        let errors = validate(&lead);
        assert_eq!(errors[0].field, "address");
    }

    #[test]
    fn collects_all_violations_independently() {
        let errors = validate(&LeadSubmission::empty());
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "phone", "address", "plotSize", "city"]);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(valid_lead()).unwrap();
        assert!(json.get("plotSize").is_some());
        assert!(json.get("plot_size").is_none());

        let parsed: LeadSubmission = serde_json::from_value(serde_json::json!({
            "name": "Jo",
            "phone": "+919999999999",
            "address": "12 Example Street, City",
            "plotSize": "1500",
            "city": "Lucknow"
        }))
        .unwrap();
        assert_eq!(parsed, valid_lead());
    }
}
