use super::*;

// =============================================================
// Required fields
// =============================================================

#[test]
fn empty_required_fields_fail_with_required() {
    for field in Field::REQUIRED {
        assert_eq!(validate_field(field, ""), Err(FieldError::Required));
        assert_eq!(validate_field(field, "   "), Err(FieldError::Required));
    }
}

#[test]
fn empty_description_is_valid() {
    assert_eq!(validate_field(Field::Description, ""), Ok(()));
}

#[test]
fn required_check_runs_before_type_rules() {
    // Blank price would also fail the numeric rule; required wins.
    assert_eq!(validate_field(Field::Price, "\t"), Err(FieldError::Required));
}

// =============================================================
// Address
// =============================================================

#[test]
fn short_address_reports_minimum_length() {
    let err = validate_field(Field::Address, "ab").unwrap_err();
    assert_eq!(err, FieldError::TooShort { field: Field::Address, min: 5 });
    assert_eq!(err.to_string(), "The address must be at least 5 characters");
}

#[test]
fn address_length_bounds_are_inclusive() {
    assert_eq!(validate_field(Field::Address, "abcde"), Ok(()));
    assert_eq!(validate_field(Field::Address, &"a".repeat(255)), Ok(()));
    assert_eq!(
        validate_field(Field::Address, &"a".repeat(256)),
        Err(FieldError::TooLong { field: Field::Address, max: 255 })
    );
}

#[test]
fn address_is_trimmed_before_measuring() {
    assert!(validate_field(Field::Address, "  abcd  ").is_err());
    assert_eq!(validate_field(Field::Address, "  Calle 1 #2-3  "), Ok(()));
}

#[test]
fn address_counts_characters_not_bytes() {
    assert_eq!(validate_field(Field::Address, "ñáéíó"), Ok(()));
}

// =============================================================
// Price / size
// =============================================================

#[test]
fn price_must_be_positive_number() {
    assert_eq!(validate_field(Field::Price, "150000"), Ok(()));
    assert_eq!(validate_field(Field::Price, "0.5"), Ok(()));
    assert_eq!(validate_field(Field::Price, "0"), Err(FieldError::NotPositive { field: Field::Price }));
    assert_eq!(validate_field(Field::Price, "-3"), Err(FieldError::NotPositive { field: Field::Price }));
    assert_eq!(validate_field(Field::Price, "abc"), Err(FieldError::NotPositive { field: Field::Price }));
}

#[test]
fn price_upper_bound() {
    assert_eq!(validate_field(Field::Price, "999999999"), Ok(()));
    assert_eq!(validate_field(Field::Price, "1000000000"), Err(FieldError::TooHigh { field: Field::Price }));
}

#[test]
fn size_upper_bound() {
    assert_eq!(validate_field(Field::Size, "999999"), Ok(()));
    assert_eq!(validate_field(Field::Size, "1000000"), Err(FieldError::TooHigh { field: Field::Size }));
}

#[test]
fn non_finite_numbers_are_rejected() {
    assert_eq!(validate_field(Field::Size, "NaN"), Err(FieldError::NotPositive { field: Field::Size }));
    assert_eq!(validate_field(Field::Size, "inf"), Err(FieldError::NotPositive { field: Field::Size }));
}

#[test]
fn amount_message_names_the_field() {
    let err = validate_field(Field::Size, "x").unwrap_err();
    assert_eq!(err.to_string(), "The size must be a number greater than 0");
}

// =============================================================
// Description
// =============================================================

#[test]
fn description_length_limit() {
    assert_eq!(validate_field(Field::Description, &"d".repeat(1000)), Ok(()));
    assert_eq!(
        validate_field(Field::Description, &"d".repeat(1001)),
        Err(FieldError::TooLong { field: Field::Description, max: 1000 })
    );
}

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_handles_blank_and_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("  "), None);
    assert_eq!(parse_amount("12abc"), None);
    assert_eq!(parse_amount(" 80 "), Some(80.0));
    assert_eq!(parse_amount("1.5"), Some(1.5));
}

#[test]
fn field_keys_are_stable() {
    let keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, ["address", "price", "size", "description"]);
}
