use super::*;

#[test]
fn field_errors_keep_first_message_per_field() {
    let mut errors = FieldErrors::new();
    errors.insert("amount", "Enter an amount.");
    errors.insert("amount", "Too large.");
    assert_eq!(errors.get("amount"), Some("Enter an amount."));
    assert_eq!(errors.len(), 1);
}

#[test]
fn field_errors_display_joins_fields_in_order() {
    let mut errors = FieldErrors::new();
    errors.insert("reason", "Required.");
    errors.insert("amount", "Too large.");
    assert_eq!(errors.to_string(), "amount: Too large.; reason: Required.");
}

#[test]
fn into_result_returns_value_when_clean() {
    assert_eq!(FieldErrors::new().into_result(7), Ok(7));
}

#[test]
fn into_result_returns_errors_when_dirty() {
    let mut errors = FieldErrors::new();
    errors.insert("title", "Required.");
    let err = errors.clone().into_result(()).expect_err("should fail");
    assert_eq!(err, errors);
}

#[test]
fn required_trims_and_flags_blank() {
    let mut errors = FieldErrors::new();
    assert_eq!(required(&mut errors, "title", "  Car loan ", "Required."), "Car loan");
    assert!(errors.is_empty());
    assert_eq!(required(&mut errors, "title", "   ", "Required."), "");
    assert_eq!(errors.get("title"), Some("Required."));
}

#[test]
fn parse_number_accepts_separators_and_whitespace() {
    assert_eq!(parse_number(" 1,500 "), Some(1500.0));
    assert_eq!(parse_number("12.5"), Some(12.5));
    assert_eq!(parse_number("-3"), Some(-3.0));
}

#[test]
fn parse_number_rejects_garbage_and_non_finite() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
}

#[test]
fn split_list_trims_and_drops_empty_and_duplicate_entries() {
    assert_eq!(
        split_list("3 months, 6 months,, 3 months\n12 months "),
        vec!["3 months".to_owned(), "6 months".to_owned(), "12 months".to_owned()]
    );
    assert!(split_list(" , \n ").is_empty());
}

#[test]
fn is_http_url_requires_scheme_and_host() {
    assert!(is_http_url("https://cdn.example.com/a.png"));
    assert!(is_http_url("http://x.io"));
    assert!(!is_http_url("ftp://x.io"));
    assert!(!is_http_url("https://"));
    assert!(!is_http_url("https:///path"));
    assert!(!is_http_url("cdn.example.com/a.png"));
}

#[test]
fn is_email_checks_basic_shape() {
    assert!(is_email("ada@example.com"));
    assert!(!is_email("ada@example"));
    assert!(!is_email("@example.com"));
    assert!(!is_email("ada@@example.com"));
    assert!(!is_email("ada smith@example.com"));
    assert!(!is_email("ada@example.com."));
}
