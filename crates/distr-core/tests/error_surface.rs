use distr_core::errors::{DistrError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("record", 3)
        .with_context("line", 7)
}

#[test]
fn file_access_error_surface() {
    let err = DistrError::FileAccess(sample_info("F001", "no such file"));
    assert_eq!(err.info().code, "F001");
    assert!(err.info().context.contains_key("record"));
}

#[test]
fn malformed_error_surface() {
    let err = DistrError::MalformedRecord(sample_info("M001", "row too short"));
    assert_eq!(err.info().code, "M001");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("7"));
}

#[test]
fn range_error_surface() {
    let err = DistrError::Range(sample_info("R001", "axis out of range").with_hint("use 0"));
    assert_eq!(err.info().hint.as_deref(), Some("use 0"));
}

#[test]
fn display_lists_context_and_hint() {
    let err = DistrError::Config(
        ErrorInfo::new("C001", "bad marker")
            .with_context("field", "begin")
            .with_hint("markers must not be empty"),
    );
    assert_eq!(
        err.to_string(),
        "config error: bad marker (code: C001) | context: [field=begin] | hint: markers must not be empty"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = DistrError::Serde(ErrorInfo::new("S001", "schema mismatch"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["code"], "S001");
    let back: DistrError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}
