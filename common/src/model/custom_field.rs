use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-defined attribute that can be attached to investor or investment
/// records without a schema migration.
///
/// The definition lives on the backend; the client only renders a matching
/// form input and validates submitted values against `field_type` and
/// `is_required` before they enter a record's `custom_fields` map.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CustomField {
    pub id: String,
    pub entity_type: EntityKind,
    pub field_name: String,
    pub field_type: FieldKind,
    #[serde(default)]
    pub is_required: bool,
    /// Allowed values, meaningful only when `field_type` is `Dropdown`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Which record kind a custom field applies to.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Investor,
    Investment,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Investor => "investor",
            EntityKind::Investment => "investment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared kind of a custom field, which picks the form input and the
/// validation applied to submitted values.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Email,
    Phone,
    Dropdown,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Date,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Dropdown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Number => "Number",
            FieldKind::Date => "Date",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone",
            FieldKind::Dropdown => "Dropdown",
        }
    }

    /// The HTML `type` attribute rendered for this kind (dropdowns render a
    /// `<select>` instead).
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Dropdown => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
        }
    }

    pub fn parse(value: &str) -> Option<FieldKind> {
        match value {
            "text" => Some(FieldKind::Text),
            "number" => Some(FieldKind::Number),
            "date" => Some(FieldKind::Date),
            "email" => Some(FieldKind::Email),
            "phone" => Some(FieldKind::Phone),
            "dropdown" => Some(FieldKind::Dropdown),
            _ => None,
        }
    }
}

/// A validated custom-field value as it travels on the wire: numbers stay
/// numbers, everything else is a string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_and_kind_use_lowercase_wire_names() {
        let field = CustomField {
            id: "cf-1".to_string(),
            entity_type: EntityKind::Investment,
            field_name: "Risk Level".to_string(),
            field_type: FieldKind::Dropdown,
            is_required: true,
            options: vec!["Low".to_string(), "High".to_string()],
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"entity_type\":\"investment\""));
        assert!(json.contains("\"field_type\":\"dropdown\""));
        let back: CustomField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn field_value_is_untagged_on_the_wire() {
        let map: std::collections::BTreeMap<String, FieldValue> =
            serde_json::from_str(r#"{"Goal":"Retirement","Score":7.5}"#).unwrap();
        assert_eq!(map["Goal"], FieldValue::Text("Retirement".to_string()));
        assert_eq!(map["Score"], FieldValue::Number(7.5));
    }
}
