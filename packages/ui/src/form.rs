//! Declarative schemas for the admin modal forms.
//!
//! Each admin screen describes its form once as a static field list; the blank
//! state, edit prefill, and request payload all derive from that description
//! instead of being repeated per screen.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// How a field renders and how its value converts into JSON.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line textarea.
    TextArea,
    /// URL input. When optional and left empty, serialises as null.
    Url,
    /// Date input, ISO `YYYY-MM-DD` value.
    Date,
    /// Numeric input, serialised as a JSON number; empty serialises as null.
    Number,
    /// Select with fixed `(value, label)` options.
    Select(&'static [(&'static str, &'static str)]),
    /// Comma-separated entry, serialised as a JSON array of strings.
    List,
}

/// One field in an admin form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub initial: &'static str,
}

impl FieldDef {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            placeholder: "",
            initial: "",
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = text;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.initial = value;
        self
    }
}

/// A complete admin form: an ordered, static list of fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormSchema {
    pub fields: &'static [FieldDef],
}

impl FormSchema {
    pub const fn new(fields: &'static [FieldDef]) -> Self {
        Self { fields }
    }

    /// Field values for a fresh create form.
    pub fn blank(&self) -> HashMap<&'static str, String> {
        self.fields
            .iter()
            .map(|field| (field.name, field.initial.to_string()))
            .collect()
    }

    /// Field values for an edit form, lifted from a serialised record.
    /// Arrays flatten to comma-separated text; missing fields prefill empty.
    pub fn prefill(&self, record: &Value) -> HashMap<&'static str, String> {
        self.fields
            .iter()
            .map(|field| {
                let value = match &record[field.name] {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => String::new(),
                };
                (field.name, value)
            })
            .collect()
    }

    /// JSON payload for an insert or update request.
    pub fn payload(&self, values: &HashMap<&'static str, String>) -> Map<String, Value> {
        let mut map = Map::new();
        for field in self.fields {
            let raw = values
                .get(field.name)
                .map(String::as_str)
                .unwrap_or("")
                .trim();
            let value = match field.kind {
                FieldKind::Number => match raw.parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::Null,
                },
                FieldKind::Url if raw.is_empty() && !field.required => Value::Null,
                FieldKind::List => Value::Array(
                    raw.split(',')
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(|part| Value::String(part.to_string()))
                        .collect(),
                ),
                _ => Value::String(raw.to_string()),
            };
            map.insert(field.name.to_string(), value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: FormSchema = FormSchema::new(&[
        FieldDef::new("title", "Title", FieldKind::Text),
        FieldDef::new("kind", "Kind", FieldKind::Select(&[("a", "A"), ("b", "B")]))
            .default_value("a"),
        FieldDef::new("link", "Link", FieldKind::Url).optional(),
        FieldDef::new("seats", "Seats", FieldKind::Number).optional(),
        FieldDef::new("tags", "Tags", FieldKind::List),
    ]);

    #[test]
    fn test_blank_uses_defaults() {
        let blank = SCHEMA.blank();
        assert_eq!(blank["title"], "");
        assert_eq!(blank["kind"], "a");
    }

    #[test]
    fn test_prefill_stringifies_record_fields() {
        let prefilled = SCHEMA.prefill(&json!({
            "title": "Summit",
            "kind": "b",
            "link": null,
            "seats": 250,
            "tags": ["ml", "vision"],
            "ignored": "extra",
        }));

        assert_eq!(prefilled["title"], "Summit");
        assert_eq!(prefilled["kind"], "b");
        assert_eq!(prefilled["link"], "");
        assert_eq!(prefilled["seats"], "250");
        assert_eq!(prefilled["tags"], "ml, vision");
    }

    #[test]
    fn test_payload_conversions() {
        let mut values = SCHEMA.blank();
        values.insert("title", "  Summit  ".to_string());
        values.insert("seats", "250".to_string());
        values.insert("tags", "ml, vision, , nlp".to_string());

        let payload = SCHEMA.payload(&values);
        assert_eq!(payload["title"], json!("Summit"));
        assert_eq!(payload["kind"], json!("a"));
        // Optional empty URL goes out as null, not as ""
        assert_eq!(payload["link"], Value::Null);
        assert_eq!(payload["seats"], json!(250));
        assert_eq!(payload["tags"], json!(["ml", "vision", "nlp"]));
    }

    #[test]
    fn test_payload_empty_number_is_null() {
        let values = SCHEMA.blank();
        let payload = SCHEMA.payload(&values);
        assert_eq!(payload["seats"], Value::Null);
    }
}
