use std::{borrow::Cow, fmt};

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::errors::{flatten_field_errors, ValidationReport, Violation};

// ───── Field paths ──────────────────────────────────────────────────

/// Location of a value inside a content document, rendered as `projects[0].links[1].href`.
/// The empty path is the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        FieldPath(String::new())
    }

    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            FieldPath(name.to_string())
        } else {
            FieldPath(format!("{}.{}", self.0, name))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        FieldPath(format!("{}[{}]", self.0, index))
    }

    /// Map keys are written as plain segments unless they would be ambiguous.
    pub fn key(&self, key: &str) -> Self {
        let plain = !key.is_empty()
            && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if plain {
            self.field(key)
        } else {
            FieldPath(format!("{}[{:?}]", self.0, key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "$")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ───── Violation collection ─────────────────────────────────────────

/// Accumulates violations across a whole document tree.
///
/// Type errors found while shaping the raw document mask any rule violations
/// reported later at or below the same path.
#[derive(Debug, Default)]
pub struct Report {
    type_errors: Vec<Violation>,
    violations: Vec<Violation>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.violations.push(Violation::new(path.to_string(), message));
    }

    pub fn push_type_error(&mut self, path: &FieldPath, expected: &str, found: &Value) {
        self.type_errors.push(Violation::new(
            path.to_string(),
            format!("Expected {}, received {}", expected, type_name(found)),
        ));
    }

    /// Runs the derived field rules of `value` and records what fails.
    pub fn check<V: Validate>(&mut self, path: &FieldPath, value: &V) {
        if let Err(errors) = value.validate() {
            self.violations.extend(flatten_field_errors(path, &errors));
        }
    }

    pub fn nested<D: Draft>(&mut self, path: &FieldPath, draft: &D) {
        draft.inspect(path, self);
    }

    pub fn each<D: Draft>(&mut self, path: &FieldPath, drafts: &[D]) {
        for (i, draft) in drafts.iter().enumerate() {
            draft.inspect(&path.index(i), self);
        }
    }

    pub fn len(&self) -> usize {
        self.type_errors.len() + self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_errors.is_empty() && self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        let Report { type_errors, violations } = self;
        let masked = |v: &Violation| type_errors.iter().any(|t| is_within(&v.path, &t.path));
        let kept: Vec<Violation> = violations.into_iter().filter(|v| !masked(v)).collect();
        type_errors.into_iter().chain(kept).collect()
    }
}

/// True when `path` is `parent` or one of its descendants.
fn is_within(path: &str, parent: &str) -> bool {
    parent == "$"
        || path
            .strip_prefix(parent)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('['))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ───── Document shape ───────────────────────────────────────────────

/// Brings one raw value into the JSON shape of a draft, reporting what does not fit.
pub type Conform = fn(&mut Value, &FieldPath, &mut Report) -> bool;

/// JSON type expected for one field of a draft.
#[derive(Clone, Copy)]
pub enum Shape {
    Text,
    Flag,
    TextList,
    Entity(Conform),
    Entities(Conform),
    EntityMap(Conform),
}

/// Checks `value` against the shape of `D`, recording each type error at its
/// own path. Ill-typed fields are removed (or replaced by an empty entity) so
/// the draft can still be read and the remaining rules still run.
///
/// `null` counts as absent.
pub fn conform<D: Draft>(value: &mut Value, path: &FieldPath, report: &mut Report) -> bool {
    if !value.is_object() {
        report.push_type_error(path, "an object", value);
        return false;
    }
    let Some(fields) = value.as_object_mut() else {
        return false;
    };

    for (name, shape) in D::SHAPE {
        let Some(field) = fields.get_mut(*name) else {
            continue;
        };
        if field.is_null() {
            fields.remove(*name);
            continue;
        }

        let at = path.field(name);
        let fits = match shape {
            Shape::Text => expect(field, Value::is_string, "a string", &at, report),
            Shape::Flag => expect(field, Value::is_boolean, "a boolean", &at, report),
            Shape::TextList => conform_text_list(field, &at, report),
            Shape::Entity(conform) => conform(field, &at, report),
            Shape::Entities(conform) => conform_entities(field, *conform, &at, report),
            Shape::EntityMap(conform) => conform_entity_map(field, *conform, &at, report),
        };
        if !fits {
            fields.remove(*name);
        }
    }

    true
}

fn expect(value: &Value, is: fn(&Value) -> bool, expected: &str, path: &FieldPath, report: &mut Report) -> bool {
    if is(value) {
        return true;
    }
    report.push_type_error(path, expected, value);
    false
}

fn conform_text_list(value: &Value, path: &FieldPath, report: &mut Report) -> bool {
    let Value::Array(items) = value else {
        report.push_type_error(path, "an array", value);
        return false;
    };

    let mut fits = true;
    for (i, item) in items.iter().enumerate() {
        fits &= expect(item, Value::is_string, "a string", &path.index(i), report);
    }
    fits
}

// Bad elements become `{}` so later indexes keep their position.
fn conform_entities(value: &mut Value, conform: Conform, path: &FieldPath, report: &mut Report) -> bool {
    if !value.is_array() {
        report.push_type_error(path, "an array", value);
        return false;
    }
    let Some(items) = value.as_array_mut() else {
        return false;
    };

    for (i, item) in items.iter_mut().enumerate() {
        if !conform(item, &path.index(i), report) {
            *item = Value::Object(Default::default());
        }
    }
    true
}

fn conform_entity_map(value: &mut Value, conform: Conform, path: &FieldPath, report: &mut Report) -> bool {
    if !value.is_object() {
        report.push_type_error(path, "an object", value);
        return false;
    }
    let Some(entries) = value.as_object_mut() else {
        return false;
    };

    for (key, entry) in entries.iter_mut() {
        if !conform(entry, &path.key(key), report) {
            *entry = Value::Object(Default::default());
        }
    }
    true
}

// ───── Drafts ───────────────────────────────────────────────────────

/// The lenient, deserializable shape of a content entity.
///
/// A raw document is first brought into the draft's [`Draft::SHAPE`], then
/// read with missing keys defaulted, so that every constraint can be reported
/// at once. Once no violations remain it is converted into the strict entity
/// by [`Draft::finish`].
pub trait Draft: DeserializeOwned + Validate {
    type Output;

    /// Name used in reports.
    const ENTITY: &'static str;

    /// Expected JSON type of each known field, by wire name.
    const SHAPE: &'static [(&'static str, Shape)];

    /// Records every violation of `self` and of nested drafts under `path`.
    fn inspect(&self, path: &FieldPath, report: &mut Report) {
        report.check(path, self);
    }

    /// Converts a draft that produced no violations.
    fn finish(self) -> Self::Output;
}

/// Validates an untyped value against the shape of `D`.
///
/// Never panics. Type errors are reported at the path of the offending value,
/// next to every rule violation elsewhere in the document.
pub fn validate_value<D: Draft>(input: &Value) -> Result<D::Output, ValidationReport> {
    let mut report = Report::new();
    let mut shaped = input.clone();

    if !conform::<D>(&mut shaped, &FieldPath::root(), &mut report) {
        return Err(ValidationReport::new(D::ENTITY, report.into_violations()));
    }

    let draft: D = match serde_json::from_value(shaped) {
        Ok(draft) => draft,
        Err(e) => {
            report.push(&FieldPath::root(), format!("Malformed {}: {}", D::ENTITY, e));
            return Err(ValidationReport::new(D::ENTITY, report.into_violations()));
        }
    };

    draft.inspect(&FieldPath::root(), &mut report);

    if report.is_empty() {
        Ok(draft.finish())
    } else {
        Err(ValidationReport::new(D::ENTITY, report.into_violations()))
    }
}

// ───── Shared field rules ───────────────────────────────────────────

const MIN_DESCRIPTION_CHARS: usize = 10;

/// Required text: present and not only whitespace.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("required", "This field is required"));
    }
    Ok(())
}

/// Descriptive text: at least ten characters once surrounding whitespace is removed.
pub fn descriptive_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(new_validation_error("too_short", "Must be at least 10 characters"));
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_fields_indexes_and_keys() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "$");

        let path = root.field("projects").index(2).field("links").index(0).field("href");
        assert_eq!(path.to_string(), "projects[2].links[0].href");

        let social = root.field("contact").field("social").key("GitHub").field("url");
        assert_eq!(social.to_string(), "contact.social.GitHub.url");

        let odd = root.field("social").key("Daily.Dev");
        assert_eq!(odd.to_string(), "social[\"Daily.Dev\"]");
    }

    #[test]
    fn descriptive_text_ignores_surrounding_whitespace() {
        assert!(descriptive_text("          ").is_err());
        assert!(descriptive_text("  short   ").is_err());
        assert!(descriptive_text("long enough text").is_ok());
    }

    #[test]
    fn type_errors_mask_rule_violations_below_them() {
        let mut report = Report::new();
        let path = FieldPath::root().field("projects").index(0);
        report.push_type_error(&path, "an object", &Value::from(3));
        report.push(&path.field("title"), "Title is required");
        report.push(&FieldPath::root().field("projects").index(1).field("title"), "Title is required");

        let violations = report.into_violations();

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, "Expected an object, received number");
        assert_eq!(violations[1].path, "projects[1].title");
    }

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(required_text("").is_err());
        assert!(required_text("   ").is_err());
        assert!(required_text("Rust").is_ok());
    }
}
