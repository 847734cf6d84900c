use super::*;

#[test]
fn parse_theme_reads_known_values() {
    assert_eq!(parse_theme("dark"), Some(true));
    assert_eq!(parse_theme(" light "), Some(false));
    assert_eq!(parse_theme("true"), None);
    assert_eq!(parse_theme(""), None);
}

#[test]
fn theme_name_round_trips_through_parse() {
    assert_eq!(parse_theme(theme_name(true)), Some(true));
    assert_eq!(parse_theme(theme_name(false)), Some(false));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
