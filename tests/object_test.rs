//! Integration tests for object validation and path rendering.

use jason::{Schema, Validator};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_single_field() {
    let schema = Schema::object().field("name", Schema::string());

    assert!(schema.validate(&json!({ "name": "hey" })).is_ok());
    assert!(!schema.validate(&json!({ "name": null })).is_ok());
    assert!(!schema.validate(&json!({ "name": 23 })).is_ok());
    assert!(!schema.validate(&json!({})).is_ok());
}

#[test]
fn test_nested_objects() {
    let schema = Schema::object().field(
        "inner",
        Schema::object().field("name", Schema::string()),
    );

    assert!(schema.validate(&json!({ "inner": { "name": "hey" } })).is_ok());
    assert!(!schema.validate(&json!({ "inner": { "name": null } })).is_ok());
    assert!(!schema.validate(&json!({ "name": null })).is_ok());
}

#[test]
fn test_nested_path_rendering() {
    let schema = Schema::object().field(
        "inner",
        Schema::object().field("name", Schema::string()),
    );

    let diagnostics = schema.validate(&json!({ "inner": { "name": 1 } }));
    assert_eq!(diagnostics.errors().len(), 1);
    assert_eq!(diagnostics.errors()[0].path.to_string(), "inner.name");
}

#[test]
fn test_missing_nested_object_reports_once() {
    let schema = Schema::object().field(
        "inner",
        Schema::object().field("name", Schema::string()),
    );

    assert_eq!(
        schema.validate(&json!({})).messages(),
        vec!["'inner': the value was not of type 'object'"]
    );
}

#[test]
fn test_every_field_is_checked() {
    let schema = Schema::object()
        .field("a", Schema::string())
        .field("b", Schema::string());

    let diagnostics = schema.validate(&json!({ "a": 1, "b": 2 }));
    let paths: Vec<_> = diagnostics
        .errors()
        .iter()
        .map(|e| e.path.to_string())
        .collect();
    assert_eq!(paths, vec!["a", "b"]);
}

#[test]
fn test_errors_follow_declaration_order() {
    let schema = Schema::object()
        .field("z", Schema::boolean())
        .field("a", Schema::boolean())
        .field("m", Schema::boolean());

    // Property order in the value does not matter.
    let diagnostics = schema.validate(&json!({ "a": 0, "m": 0, "z": 0 }));
    let paths: Vec<_> = diagnostics
        .errors()
        .iter()
        .map(|e| e.path.to_string())
        .collect();
    assert_eq!(paths, vec!["z", "a", "m"]);
}

#[test]
fn test_user_schema_collects_all_errors() {
    let user = Schema::object()
        .field("id", Schema::string().starts_with("user-"))
        .field("username", Schema::string().len_range(4..=16))
        .field("age", Schema::number().min(0.0));

    assert!(user
        .validate(&json!({
            "id": "user-0128432",
            "username": "4to16characters",
            "age": 23
        }))
        .try_throw_errors()
        .is_ok());

    let diagnostics = user.validate(&json!({
        "id": "user",
        "username": "asd",
        "age": -3
    }));
    assert_eq!(
        diagnostics.messages(),
        vec![
            "'id': 'user' did not start with 'user-'",
            "'username': 'asd' had a length less than the minimum length of '4'",
            "'age': '-3' is not greater than or equal to '0'",
        ]
    );
    assert_eq!(diagnostics.depth(), 0);
}

#[test]
fn test_object_rejects_null_and_arrays() {
    let schema = Schema::object();
    assert!(schema.validate(&json!({})).is_ok());
    assert!(!schema.validate(&json!(null)).is_ok());
    assert!(!schema.validate(&json!([])).is_ok());
}

#[test]
fn test_deeply_nested_path() {
    let schema = Schema::object().field(
        "body",
        Schema::object().field(
            "data",
            Schema::object().field("meta", Schema::object().field("id", Schema::number())),
        ),
    );

    let diagnostics = schema.validate(&json!({ "body": { "data": { "meta": { "id": "7" } } } }));
    assert_eq!(
        diagnostics.messages(),
        vec!["'body.data.meta.id': the value is not of type 'number'"]
    );
}
