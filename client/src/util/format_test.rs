use super::*;

#[test]
fn money_groups_thousands_and_pads_cents() {
    assert_eq!(money(1234.5), "$1,234.50");
    assert_eq!(money(1_000_000.0), "$1,000,000.00");
    assert_eq!(money(0.0), "$0.00");
    assert_eq!(money(999.999), "$1,000.00");
}

#[test]
fn money_keeps_negative_sign() {
    assert_eq!(money(-12.3), "-$12.30");
}

#[test]
fn percent_drops_trailing_zero() {
    assert_eq!(percent(5.0), "5%");
    assert_eq!(percent(7.25), "7.25%");
}

#[test]
fn date_takes_calendar_part() {
    assert_eq!(date(Some("2024-03-01T10:00:00.000Z")), "2024-03-01");
    assert_eq!(date(Some("2024-03-01")), "2024-03-01");
    assert_eq!(date(None), "-");
    assert_eq!(date(Some("  ")), "-");
}

#[test]
fn excerpt_cuts_long_text() {
    assert_eq!(excerpt("short", 10), "short");
    assert_eq!(excerpt("a long description here", 6), "a long…");
}
