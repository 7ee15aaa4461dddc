use distr_core::DistrError;
use distr_reader::decode::MAX_DIM;
use distr_reader::decode_record;

fn record(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn malformed_code(lines: &[&str]) -> String {
    match decode_record(0, &record(lines)) {
        Err(DistrError::MalformedRecord(info)) => info.code,
        other => panic!("expected malformed record, got {other:?}"),
    }
}

#[test]
fn header_order_does_not_matter() {
    let distr = decode_record(
        0,
        &record(&[
            "Dim: 2",
            "",
            "Comment: ignored",
            "NBins: 1",
            "PolConfig: e+p+",
            "Name: swapped",
            "Bin-ID d0 d1  val",
            "B0 0.25 -1.5 9.0",
        ]),
    )
    .expect("decode");
    assert_eq!(distr.name(), "swapped");
    assert_eq!(distr.pol_config(), "e+p+");
    assert_eq!(distr.bins()[0].centers(), &[0.25, -1.5]);
    assert_eq!(distr.bins()[0].value(), 9.0);
}

#[test]
fn lines_after_the_table_are_never_inspected() {
    let distr = decode_record(
        0,
        &record(&[
            "NBins: 1",
            "Dim: 1",
            "Bin-ID",
            "B0 1.0 2.0",
            "this is not a row",
            "NBins: oops",
        ]),
    )
    .expect("decode");
    assert_eq!(distr.n_bins(), 1);
}

#[test]
fn extra_row_columns_are_ignored() {
    let distr = decode_record(
        0,
        &record(&["NBins: 1", "Dim: 1", "Bin-ID d0  val", "B0 1.0 2.0 3.0 4.0"]),
    )
    .expect("decode");
    assert_eq!(distr.bins()[0].value(), 2.0);
}

#[test]
fn name_and_pol_config_default_to_empty() {
    let distr = decode_record(0, &record(&["NBins: 0", "Dim: 3", "Bin-ID"])).expect("decode");
    assert_eq!(distr.name(), "");
    assert_eq!(distr.pol_config(), "");
    assert!(distr.bins().is_empty());
}

#[test]
fn missing_declarations_are_reported() {
    assert_eq!(malformed_code(&["Dim: 1", "Bin-ID", "B0 1 2"]), "missing_n_bins");
    assert_eq!(malformed_code(&["NBins: 1", "Bin-ID", "B0 1 2"]), "missing_dim");
    // declared after the table header is too late
    assert_eq!(
        malformed_code(&["NBins: 1", "Bin-ID", "B0 1 2", "Dim: 1"]),
        "missing_dim"
    );
    assert_eq!(malformed_code(&["Name: x", "NBins: 0", "Dim: 1"]), "missing_table");
}

#[test]
fn bad_header_values_are_reported() {
    assert_eq!(malformed_code(&["Name:"]), "missing_value");
    assert_eq!(malformed_code(&["NBins: -2"]), "invalid_integer");
    assert_eq!(malformed_code(&["Dim: two"]), "invalid_integer");
    assert_eq!(malformed_code(&["NBins: 0", "Dim: 0", "Bin-ID"]), "dim_zero");
}

#[test]
fn oversized_dim_is_reported() {
    let huge = format!("Dim: {}", usize::MAX);
    assert_eq!(
        malformed_code(&["NBins: 1", &huge, "Bin-ID", "B0 1.0 2.0"]),
        "dim_too_large"
    );
    assert_eq!(malformed_code(&["NBins: 0", &huge, "Bin-ID"]), "dim_too_large");

    let over = format!("Dim: {}", MAX_DIM + 1);
    assert_eq!(malformed_code(&["NBins: 0", &over, "Bin-ID"]), "dim_too_large");

    let at_limit = format!("Dim: {MAX_DIM}");
    let distr = decode_record(0, &record(&["NBins: 0", &at_limit, "Bin-ID"])).expect("decode");
    assert_eq!(distr.dim(), MAX_DIM);
}

#[test]
fn bad_rows_are_reported() {
    assert_eq!(
        malformed_code(&["NBins: 1", "Dim: 2", "Bin-ID", "B0 1.0 2.0"]),
        "row_too_short"
    );
    assert_eq!(
        malformed_code(&["NBins: 1", "Dim: 1", "Bin-ID", "B0 abc 2.0"]),
        "invalid_float"
    );
    assert_eq!(
        malformed_code(&["NBins: 1", "Dim: 1", "Bin-ID", "B0 1.0 2.0x"]),
        "invalid_float"
    );
    assert_eq!(
        malformed_code(&["NBins: 3", "Dim: 1", "Bin-ID", "B0 1.0 2.0"]),
        "table_truncated"
    );
}

#[test]
fn errors_point_at_the_offending_line() {
    let err = decode_record(
        4,
        &record(&["NBins: 2", "Dim: 1", "Bin-ID", "B0 1.0 2.0", "B1 1.5 nope"]),
    )
    .unwrap_err();
    let info = err.info();
    assert_eq!(info.code, "invalid_float");
    assert_eq!(info.context.get("record").map(String::as_str), Some("4"));
    assert_eq!(info.context.get("line").map(String::as_str), Some("4"));
    assert_eq!(info.context.get("token").map(String::as_str), Some("nope"));
}
