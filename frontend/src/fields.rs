//! Boundary validation for form input.
//!
//! Custom-field values arrive from the DOM as raw strings; this module is
//! where they are checked against the declared field kind and required
//! flag and converted into typed [`FieldValue`]s. The static PAN and
//! interest-date checks used by the fixed forms live here too.

use std::collections::BTreeMap;

use regex::Regex;

use common::model::custom_field::{CustomField, FieldKind, FieldValue};

/// Validates the raw values entered for `fields` and produces the typed
/// map stored on the record. Returns a user-facing message for the first
/// offending field. Optional fields left blank are simply omitted.
pub fn validate_custom_fields(
    fields: &[CustomField],
    raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, FieldValue>, String> {
    let mut values = BTreeMap::new();

    for field in fields {
        let entered = raw
            .get(&field.field_name)
            .map(|v| v.trim())
            .unwrap_or_default();

        if entered.is_empty() {
            if field.is_required {
                return Err(format!("{} is required", field.field_name));
            }
            continue;
        }

        let value = match field.field_type {
            FieldKind::Text => FieldValue::Text(entered.to_string()),
            FieldKind::Number => match entered.parse::<f64>() {
                Ok(number) if number.is_finite() => FieldValue::Number(number),
                _ => return Err(format!("{} must be a number", field.field_name)),
            },
            FieldKind::Date => {
                if !Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap().is_match(entered) {
                    return Err(format!("{} must be a date (YYYY-MM-DD)", field.field_name));
                }
                FieldValue::Text(entered.to_string())
            }
            FieldKind::Email => {
                if !Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap().is_match(entered) {
                    return Err(format!("{} must be an email address", field.field_name));
                }
                FieldValue::Text(entered.to_string())
            }
            FieldKind::Phone => {
                if !Regex::new(r"^[0-9+\-() ]{6,20}$").unwrap().is_match(entered) {
                    return Err(format!("{} must be a phone number", field.field_name));
                }
                FieldValue::Text(entered.to_string())
            }
            FieldKind::Dropdown => {
                if !field.options.iter().any(|option| option == entered) {
                    return Err(format!(
                        "{} must be one of its configured options",
                        field.field_name
                    ));
                }
                FieldValue::Text(entered.to_string())
            }
        };
        values.insert(field.field_name.clone(), value);
    }

    Ok(values)
}

/// PAN format: five letters, four digits, one letter (ABCDE1234F).
pub fn is_valid_pan(pan: &str) -> bool {
    Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap().is_match(pan)
}

/// Interest date format: `DDMM` with a plausible day and month.
pub fn is_valid_ddmm(value: &str) -> bool {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let day: u32 = value[..2].parse().unwrap_or(0);
    let month: u32 = value[2..].parse().unwrap_or(0);
    (1..=31).contains(&day) && (1..=12).contains(&month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::custom_field::EntityKind;

    fn field(name: &str, kind: FieldKind, required: bool, options: &[&str]) -> CustomField {
        CustomField {
            id: format!("cf-{name}"),
            entity_type: EntityKind::Investor,
            field_name: name.to_string(),
            field_type: kind,
            is_required: required,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn raw(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn required_field_left_blank_is_rejected() {
        let fields = vec![field("Risk Level", FieldKind::Text, true, &[])];
        let error = validate_custom_fields(&fields, &raw(&[])).unwrap_err();
        assert_eq!(error, "Risk Level is required");
    }

    #[test]
    fn optional_blank_fields_are_omitted() {
        let fields = vec![field("Notes", FieldKind::Text, false, &[])];
        let values = validate_custom_fields(&fields, &raw(&[("Notes", "  ")])).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn number_fields_become_numbers() {
        let fields = vec![field("Score", FieldKind::Number, true, &[])];
        let values = validate_custom_fields(&fields, &raw(&[("Score", "7.5")])).unwrap();
        assert_eq!(values["Score"], FieldValue::Number(7.5));

        let error = validate_custom_fields(&fields, &raw(&[("Score", "seven")])).unwrap_err();
        assert_eq!(error, "Score must be a number");
    }

    #[test]
    fn dropdown_values_must_match_an_option() {
        let fields = vec![field("Tier", FieldKind::Dropdown, true, &["Low", "High"])];
        assert!(validate_custom_fields(&fields, &raw(&[("Tier", "High")])).is_ok());
        assert!(validate_custom_fields(&fields, &raw(&[("Tier", "Medium")])).is_err());
    }

    #[test]
    fn email_and_date_shapes_are_checked() {
        let fields = vec![
            field("Contact", FieldKind::Email, false, &[]),
            field("Review On", FieldKind::Date, false, &[]),
        ];
        assert!(validate_custom_fields(
            &fields,
            &raw(&[("Contact", "a@b.in"), ("Review On", "2025-01-31")])
        )
        .is_ok());
        assert!(validate_custom_fields(&fields, &raw(&[("Contact", "not-an-email")])).is_err());
        assert!(validate_custom_fields(&fields, &raw(&[("Review On", "31/01/2025")])).is_err());
    }

    #[test]
    fn pan_format() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCD1234F"));
        assert!(!is_valid_pan("ABCDE12345"));
    }

    #[test]
    fn ddmm_format() {
        assert!(is_valid_ddmm("0104"));
        assert!(is_valid_ddmm("3112"));
        assert!(!is_valid_ddmm("3213"));
        assert!(!is_valid_ddmm("0013"));
        assert!(!is_valid_ddmm("104"));
        assert!(!is_valid_ddmm("01-4"));
    }
}
