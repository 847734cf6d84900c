use super::*;

#[test]
fn requested_path_without_query() {
    assert_eq!(requested_path("/dashboard/my-loans", ""), "/dashboard/my-loans");
}

#[test]
fn requested_path_keeps_query_once() {
    assert_eq!(requested_path("/payment-success", "success=true"), "/payment-success?success=true");
    assert_eq!(requested_path("/payment-success", "?success=true"), "/payment-success?success=true");
}
