//! End-to-end runs through declared schemas, builders and documents.

use pretty_assertions::assert_eq;
use serde_json::json;
use warden_validator::json::{raw_input_from_json, record_to_json};
use warden_validator::prelude::*;
use warden_validator::{record, schema};

schema! {
    /// The sign-up form used across these tests.
    struct SignUp {
        username: TextField::new().max_length(20).min_length(10),
        age: IntegerField::new().range(18, 100),
        email: EmailField::new().with_display_name("Email"),
        website: UrlField::new().optional(),
    }
}

#[test]
fn valid_record() {
    let mut engine = SignUp::validator(record! {
        "username" => "virusdefender",
        "age" => 18,
        "email" => "virusdefender@qq.com",
        "website" => "https://baidu.com",
    });
    assert!(engine.is_valid());
    assert_eq!(
        record_to_json(engine.data().unwrap()),
        json!({
            "username": "virusdefender",
            "age": 18,
            "email": "virusdefender@qq.com",
            "website": "https://baidu.com",
        })
    );
}

#[test]
fn invalid_record_reports_all_fields_in_order() {
    let mut engine = SignUp::validator(record! {
        "username" => "12333",
        "age" => 10,
        "email" => "234@",
    });
    assert!(!engine.is_valid());

    let errors = engine.errors();
    assert!(errors.len() >= 3);
    assert_eq!(
        errors.iter().map(|e| e.field_name.as_str()).collect::<Vec<_>>(),
        ["username", "age", "email"]
    );
    assert_eq!(errors[2].display_name, "Email");
    assert_eq!(
        engine.data(),
        Err(NotValidatedError::Failed {
            error_count: errors.len()
        })
    );
}

#[test]
fn data_before_run_is_a_usage_error() {
    let engine = SignUp::validator(RawInput::new());
    assert_eq!(engine.data(), Err(NotValidatedError::NotRun));
    assert!(engine.errors().is_empty());
}

#[test]
fn schema_trait_validate() {
    let outcome = SignUp::validate(&record! {
        "username" => "virusdefender",
        "age" => 40.0,
        "email" => "virusdefender@qq.com",
    });
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(outcome.errors()[0].kind, ErrorKind::TypeMismatch);
    assert_eq!(SignUp::registry().len(), 4);
}

#[test]
fn json_input_keeps_number_types() {
    let input = raw_input_from_json(json!({
        "username": "virusdefender",
        "age": 30,
        "email": "virusdefender@qq.com",
        "website": null,
    }))
    .unwrap();

    let cleaned = SignUp::validate(&input).into_result().unwrap();
    assert_eq!(cleaned["age"], Value::Integer(30));
    assert_eq!(cleaned["website"], Value::Null);
}

#[test]
fn registries_are_shared_across_threads() {
    let registry = SchemaRegistry::builder()
        .field("n", IntegerField::new().range(0, 9))
        .build()
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16_i64)
            .map(|n| {
                let registry = &registry;
                scope.spawn(move || registry.validate(&record! { "n" => n }).is_valid())
            })
            .collect();
        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), n < 10);
        }
    });
}

// ============================================================================
// SCHEMA DOCUMENTS
// ============================================================================

const SIGN_UP_TOML: &str = r#"
name = "sign-up"

[[fields]]
name = "username"
type = "text"
max_length = 20
min_length = 10

[[fields]]
name = "age"
type = "integer"
min = 18
max = 100

[[fields]]
name = "email"
type = "email"
display_name = "Email"

[[fields]]
name = "website"
type = "url"
required = false
"#;

#[test]
fn toml_document_matches_declared_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sign-up.toml");
    std::fs::write(&path, SIGN_UP_TOML).unwrap();

    let registry = SchemaRegistry::from_path(&path).unwrap();
    assert_eq!(registry.name(), Some("sign-up"));

    let input = record! { "username" => "12333", "age" => 10, "email" => "234@" };
    assert_eq!(registry.validate(&input), SignUp::validate(&input));
}

#[test]
fn json_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flags.json");
    std::fs::write(
        &path,
        r#"{"fields": [{"name": "active", "type": "boolean"}, {"name": "ratio", "type": "float", "min": 0, "max": 1}]}"#,
    )
    .unwrap();

    let registry = SchemaRegistry::from_path(&path).unwrap();
    let cleaned = registry
        .validate(&record! { "active" => "True", "ratio" => 0.25 })
        .into_result()
        .unwrap();
    assert_eq!(cleaned["active"], Value::Boolean(true));
    assert_eq!(cleaned["ratio"], Value::Float(0.25));
}

#[test]
fn bad_documents_fail_to_build() {
    let err = SchemaRegistry::from_document(
        &SchemaDocument::from_json_str(
            r#"{"fields": [{"name": "a", "type": "text"}, {"name": "a", "type": "url"}]}"#,
        )
        .unwrap(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "duplicate field `a`");
}

// ============================================================================
// ALL FIELDS REQUIRED
// ============================================================================

schema! {
    struct Profile {
        username: TextField::new().max_length(20).min_length(10),
        age: IntegerField::new().range(18, 100),
        email: EmailField::new(),
        website: UrlField::new(),
    }
}

#[test]
fn cleaned_data_equals_valid_input() {
    let input = record! {
        "username" => "virusdefender",
        "age" => 30,
        "email" => "xxxx@qq.com",
        "website" => "https://virusdefender.net",
    };

    let mut engine = Profile::validator(input.clone());
    assert!(engine.is_valid());
    assert_eq!(engine.data(), Ok(&input));
    assert_eq!(
        record_to_json(engine.data().unwrap()).to_string(),
        r#"{"username":"virusdefender","age":30,"email":"xxxx@qq.com","website":"https://virusdefender.net"}"#
    );
}

#[test]
fn missing_required_website_is_reported_last() {
    let mut engine = Profile::validator(record! {
        "username" => "12333",
        "age" => 10,
        "email" => "234@",
    });
    assert!(!engine.is_valid());
    assert_eq!(
        engine
            .errors()
            .iter()
            .map(|e| (e.field_name.as_str(), e.kind))
            .collect::<Vec<_>>(),
        [
            ("username", ErrorKind::TooShort),
            ("age", ErrorKind::OutOfRange),
            ("email", ErrorKind::TooShort),
            ("website", ErrorKind::MissingRequired),
        ]
    );
}
