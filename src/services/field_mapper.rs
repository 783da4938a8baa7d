//! Normalization of form submissions onto a CMS collection schema.
//!
//! Form widgets post field names in varying casings and languages, and
//! represent checkboxes as booleans or the strings "true"/"false". Each
//! target field is described by one [`FieldRule`] naming the accepted
//! source keys in precedence order; a single resolver interprets the table.

use serde_json::{Map, Value};

use crate::models::cms::CmsFieldData;
use crate::models::form::FormSubmission;

/// How a resolved source value becomes the target field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// First source key holding a non-empty string wins.
    Identity,
    /// Checkbox stored as a selectable tag: a true-ish source value emits
    /// the target's own label, anything else omits the field.
    BoolToLabel,
    /// Checkbox stored as a switch: emits literal true/false and never
    /// omits the field (absent input reads as false).
    BoolPassthrough,
}

/// Declarative mapping for one target field.
#[derive(Debug)]
pub struct FieldRule {
    pub target: &'static str,
    pub sources: &'static [&'static str],
    pub transform: Transform,
}

/// Rule table for the event collection. Source lists carry the display
/// casing first, then the lowercased or slugified forms the form widget
/// is known to post.
pub const EVENT_FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        target: "Text",
        sources: &["Beschreibung", "beschreibung", "Text", "text"],
        transform: Transform::Identity,
    },
    FieldRule {
        target: "Uhrzeit",
        sources: &["Uhrzeit", "uhrzeit"],
        transform: Transform::Identity,
    },
    // The collection schema misspells "Barrierefreiheit"; accept both.
    FieldRule {
        target: "Barierefreiheit",
        sources: &[
            "Barierefreiheit",
            "barierefreiheit",
            "Barrierefreiheit",
            "barrierefreiheit",
        ],
        transform: Transform::Identity,
    },
    FieldRule {
        target: "Täglich",
        sources: &["Täglich", "täglich"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Wöchentlich",
        sources: &["Wöchentlich", "wöchentlich"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Einmalig",
        sources: &["Einmalig", "einmalig"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Aufzug",
        sources: &["Aufzug", "aufzug"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Treppenstufen",
        sources: &["Treppenstufen", "treppenstufen"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Barrierefreie Toilette",
        sources: &["Barrierefreie Toilette", "barrierefreie-toilette"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Barrierefreier Zugang",
        sources: &["Barrierefreier Zugang", "barrierefreier-zugang"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Alles Barrierefrei",
        sources: &["Alles Barrierefrei", "alles-barrierefrei"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Nicht Barrierefrei",
        sources: &["Nicht Barrierefrei", "nicht-barrierefrei"],
        transform: Transform::BoolToLabel,
    },
    FieldRule {
        target: "Tag",
        sources: &["Tag", "tag", "Wochentag", "wochentag"],
        transform: Transform::Identity,
    },
    FieldRule {
        target: "Wiederholung",
        sources: &["Wiederholung", "wiederholung"],
        transform: Transform::Identity,
    },
];

/// Apply a rule table to a submission and strip empty values.
///
/// No required-field validation happens here: a wholly empty submission
/// yields an empty field set.
pub fn map_form_fields(rules: &[FieldRule], form: &FormSubmission) -> CmsFieldData {
    let mut field_data = Map::new();

    for rule in rules {
        if let Some(value) = resolve_field(rule, form) {
            field_data.insert(rule.target.to_string(), value);
        }
    }

    strip_empty(&mut field_data);
    field_data
}

fn resolve_field(rule: &FieldRule, form: &FormSubmission) -> Option<Value> {
    match rule.transform {
        Transform::Identity => first_text(rule.sources, form).map(Value::String),
        Transform::BoolToLabel => {
            any_truthy(rule.sources, form).then(|| Value::String(rule.target.to_string()))
        }
        Transform::BoolPassthrough => Some(Value::Bool(any_truthy(rule.sources, form))),
    }
}

/// First source key holding a non-empty string. Numbers are accepted and
/// formatted; anything else is skipped so a later synonym can still win.
fn first_text(sources: &[&str], form: &FormSubmission) -> Option<String> {
    sources.iter().find_map(|key| match form.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Whether any source key holds literal `true` or the string "true".
fn any_truthy(sources: &[&str], form: &FormSubmission) -> bool {
    sources.iter().any(|key| match form.get(*key) {
        Some(Value::Bool(true)) => true,
        Some(Value::String(s)) => s == "true",
        _ => false,
    })
}

/// Remove entries whose value is the empty string or null, so the CMS
/// never receives an explicit empty value for an optional field.
pub fn strip_empty(field_data: &mut CmsFieldData) {
    field_data.retain(|_, value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    });
}
