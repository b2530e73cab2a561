//! Model resolution.
//!
//! Pure lookup: a unit's model source is mapped against the manifest's
//! model table. Name uniqueness is expected at load time, but the
//! resolver still treats "not exactly one match" as a failure.

use serde_json::Value;

use stencil_core::{ModelEntry, ModelSource, Unit};

use crate::error::GenerateError;

/// Outcome of a name lookup in the model table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    NotFound,
    Ambiguous,
}

/// Look up `name` in the model table, requiring exactly one match.
pub fn lookup<'a>(name: &str, models: &'a [ModelEntry]) -> Lookup<'a> {
    let mut matches = models.iter().filter(|m| m.name == name);
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Lookup::Found(&entry.value),
        (Some(_), Some(_)) => Lookup::Ambiguous,
        (None, _) => Lookup::NotFound,
    }
}

/// Resolve the model value for `unit`.
///
/// A named reference takes precedence over an inline value; with neither
/// the unit renders model-less (`Ok(None)`). Both a missing and a
/// duplicated referenced name collapse to [`GenerateError::UnknownModel`].
pub fn resolve<'a>(
    unit: &'a Unit,
    models: &'a [ModelEntry],
) -> Result<Option<&'a Value>, GenerateError> {
    match unit.model_source() {
        ModelSource::Reference(name) => match lookup(name, models) {
            Lookup::Found(value) => Ok(Some(value)),
            Lookup::NotFound | Lookup::Ambiguous => Err(GenerateError::UnknownModel {
                name: name.to_string(),
            }),
        },
        ModelSource::Inline(value) => Ok(Some(value)),
        ModelSource::Absent => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn entry(name: &str, value: Value) -> ModelEntry {
        ModelEntry {
            name: name.to_string(),
            value,
        }
    }

    fn unit_with_ref(name: &str) -> Unit {
        Unit {
            name: "tpl".into(),
            output_name: "tpl.txt".into(),
            model_ref: Some(name.into()),
            model: None,
        }
    }

    #[test]
    fn lookup_single_match() {
        let models = vec![entry("a", json!(1)), entry("b", json!(2))];
        assert_eq!(lookup("b", &models), Lookup::Found(&json!(2)));
    }

    #[test]
    fn lookup_missing_name() {
        let models = vec![entry("a", json!(1))];
        assert_eq!(lookup("ghost", &models), Lookup::NotFound);
    }

    #[test]
    fn lookup_duplicate_name_is_ambiguous() {
        let models = vec![entry("a", json!(1)), entry("a", json!(2))];
        assert_eq!(lookup("a", &models), Lookup::Ambiguous);
    }

    #[test]
    fn resolve_returns_exact_referenced_value() {
        let models = vec![entry("greeting", json!({ "who": "world" }))];
        let unit = unit_with_ref("greeting");
        let value = resolve(&unit, &models).expect("resolve");
        assert_eq!(value, Some(&json!({ "who": "world" })));
    }

    #[test]
    fn resolve_missing_reference_is_unknown_model() {
        let unit = unit_with_ref("ghost");
        let err = resolve(&unit, &[]).unwrap_err();
        match err {
            GenerateError::UnknownModel { name } => assert_eq!(name, "ghost"),
            other => panic!("expected UnknownModel, got {other:?}"),
        }
    }

    #[test]
    fn resolve_duplicate_reference_is_unknown_model() {
        let models = vec![entry("dup", json!(1)), entry("dup", json!(2))];
        let unit = unit_with_ref("dup");
        assert!(matches!(
            resolve(&unit, &models),
            Err(GenerateError::UnknownModel { .. })
        ));
    }

    #[test]
    fn resolve_prefers_reference_over_inline() {
        let models = vec![entry("named", json!("from table"))];
        let unit = Unit {
            name: "tpl".into(),
            output_name: "tpl.txt".into(),
            model_ref: Some("named".into()),
            model: Some(json!("inline, must be ignored")),
        };
        let value = resolve(&unit, &models).expect("resolve");
        assert_eq!(value, Some(&json!("from table")));
    }

    #[test]
    fn resolve_inline_when_no_reference() {
        let unit = Unit {
            name: "tpl".into(),
            output_name: "tpl.txt".into(),
            model_ref: None,
            model: Some(json!({ "x": 1 })),
        };
        assert_eq!(resolve(&unit, &[]).unwrap(), Some(&json!({ "x": 1 })));
    }

    #[test]
    fn resolve_absent_model_is_none() {
        let unit = Unit {
            name: "tpl".into(),
            output_name: "tpl.txt".into(),
            model_ref: None,
            model: None,
        };
        assert_eq!(resolve(&unit, &[]).unwrap(), None);
    }
}
