//! Client Schema Tests
//!
//! A `tsconfigRaw` reader built from the combinators, the way a configuration
//! collaborator would use the engine.

use pretty_assertions::assert_eq;
use serde_json::json;

use shapecheck_core::{
    and, array_of, assert, boolean, display, object, one_of, partial, record, report, string,
    Expect, Message, Validator, Value,
};

const BOOLEAN_OPTIONS: &[&str] = &[
    "alwaysStrict",
    "experimentalDecorators",
    "preserveValueImports",
    "strict",
    "useDefineForClassFields",
    "verbatimModuleSyntax",
];

const STRING_OPTIONS: &[&str] = &[
    "baseUrl",
    "jsxFactory",
    "jsxFragmentFactory",
    "jsxImportSource",
    "target",
];

const JSX: &[&str] = &["preserve", "react-native", "react", "react-jsx", "react-jsxdev"];

const IMPORTS_NOT_USED_AS_VALUES: &[&str] = &["remove", "preserve", "error"];

fn one_of_option(list: &[&'static str]) -> Box<dyn Validator> {
    one_of(list.iter().copied())
        .expect(Message::dynamic(|p| {
            format!(
                "'{}' should be one of {} but {}",
                p.path(),
                p.expected,
                display(&p.actual)
            )
        }))
        .boxed()
}

fn compiler_options() -> impl Validator {
    let mut fields: Vec<(&str, Box<dyn Validator>)> = vec![];
    fields.extend(BOOLEAN_OPTIONS.iter().map(|key| (*key, boolean().boxed())));
    fields.extend(STRING_OPTIONS.iter().map(|key| (*key, string().boxed())));
    fields.push(("importsNotUsedAsValues", one_of_option(IMPORTS_NOT_USED_AS_VALUES)));
    fields.push(("jsx", one_of_option(JSX)));
    fields.push(("paths", record(string(), array_of(string())).boxed()));

    and(object(), partial(fields))
}

fn tsconfig_raw() -> impl Validator {
    and(
        object().expect("'tsconfigRaw' should be object"),
        partial([("compilerOptions", compiler_options().boxed())]),
    )
}

fn wrong_values(kind: &str) -> Vec<Value> {
    match kind {
        "boolean" => vec![json!(""), json!(0), json!(null), json!({}), json!([])],
        _ => vec![json!(0), json!(false), json!(null), json!({}), json!([])],
    }
}

#[test]
fn test_tsconfig_raw_requires_object() {
    let validator = tsconfig_raw();
    let err = assert(&json!(""), &validator).unwrap_err();
    assert_eq!(err.to_string(), "'tsconfigRaw' should be object");

    assert!(!validator.is(&json!({"compilerOptions": ""})));
    assert!(validator.is(&json!({})));
    assert!(validator.is(&json!({"compilerOptions": {}})));
}

#[test]
fn test_compiler_options_shape() {
    let validator = compiler_options();
    assert!(!validator.is(&json!("")));
    assert!(!validator.is(&json!({"jsx": 0})));
    assert!(validator.is(&json!({})));
    assert!(validator.is(&json!({"paths": {"./": ["main"]}})));
}

#[test]
fn test_compiler_option_types() {
    let validator = compiler_options();

    for key in BOOLEAN_OPTIONS {
        assert!(validator.is(&json!({ *key: false })), "{}", key);
        for wrong in wrong_values("boolean") {
            assert!(!validator.is(&json!({ *key: wrong })), "{}", key);
        }
    }

    for key in STRING_OPTIONS {
        assert!(validator.is(&json!({ *key: "" })), "{}", key);
        for wrong in wrong_values("string") {
            assert!(!validator.is(&json!({ *key: wrong })), "{}", key);
        }
    }
}

#[test]
fn test_compiler_option_lists() {
    let validator = compiler_options();

    for value in IMPORTS_NOT_USED_AS_VALUES {
        assert!(validator.is(&json!({ "importsNotUsedAsValues": value })));
    }
    for value in JSX {
        assert!(validator.is(&json!({ "jsx": value })));
    }

    let err = assert(&json!({"jsx": ""}), &validator).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'jsx' should be one of 'preserve', 'react-native', 'react', 'react-jsx', or \
         'react-jsxdev' but ''"
    );

    let err = assert(&json!({"importsNotUsedAsValues": 0}), &validator).unwrap_err();
    assert_eq!(
        err.to_string(),
        "'importsNotUsedAsValues' should be one of 'remove', 'preserve', or 'error' but 0"
    );
}

#[test]
fn test_paths() {
    let paths = record(string(), array_of(string()));

    assert!(!paths.is(&json!("")));
    assert!(!paths.is(&json!({"": ""})));
    assert!(!paths.is(&json!({"": [0]})));
    assert!(!paths.is(&json!({"": [null]})));

    assert!(paths.is(&json!({"": []})));
    assert!(paths.is(&json!({"": [""]})));
    assert!(paths.is(&json!({"": ["", "a", "b", "c"]})));
    assert!(paths.is(&json!({"a": ["", "a", "b", "c"], "b": ["d", "e", "f"]})));
}

#[test]
fn test_nested_path_in_default_message() {
    let err = assert(
        &json!({"compilerOptions": {"paths": {"./": ["main", 0]}}}),
        &tsconfig_raw(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "'compilerOptions.paths../.1' should be string but number"
    );
}

#[test]
fn test_report_lists_every_defect() {
    let input = json!({
        "compilerOptions": {
            "strict": "yes",
            "target": 5,
            "jsx": "vue",
            "paths": {"~": "src"},
        }
    });

    let report = report(&input, &tsconfig_raw());
    assert!(!report.valid);
    assert_eq!(
        report.messages(),
        vec![
            "'compilerOptions.strict' should be boolean but string",
            "'compilerOptions.target' should be string but number",
            "'compilerOptions.jsx' should be one of 'preserve', \
             'react-native', 'react', 'react-jsx', or 'react-jsxdev' but 'vue'",
            "'compilerOptions.paths.~' should be array but string",
        ]
    );
}
