use super::*;

fn loan(id: &str, title: &str, category: &str, show_on_home: bool) -> Loan {
    Loan {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} for small traders"),
        category: category.to_owned(),
        interest_rate: 7.5,
        max_loan_limit: 1000.0,
        emi_plans: vec!["3 months".to_owned(), "6 months".to_owned()],
        images: vec!["https://img.example.com/cover.png".to_owned(), "https://img.example.com/2.png".to_owned()],
        required_documents: vec!["National ID".to_owned()],
        show_on_home,
        created_by: "mgr@example.com".to_owned(),
        created_at: None,
    }
}

fn valid_form() -> LoanForm {
    LoanForm {
        title: "Market Stall Loan".to_owned(),
        description: "Working capital".to_owned(),
        category: "Business".to_owned(),
        interest_rate: "0".to_owned(),
        max_loan_limit: "1,000".to_owned(),
        emi_plans: "3 months, 6 months".to_owned(),
        images: "https://img.example.com/a.png".to_owned(),
        required_documents: String::new(),
        show_on_home: true,
    }
}

#[test]
fn loan_deserializes_backend_record() {
    let loan: Loan = serde_json::from_value(serde_json::json!({
        "_id": "l-1",
        "title": "Stall",
        "interestRate": 5,
        "maxLoanLimit": 2500,
        "emiPlans": ["6 months"],
        "images": ["https://x.io/a.png"],
        "showOnHome": true,
        "createdBy": "mgr@example.com"
    }))
    .expect("loan");
    assert_eq!(loan.id, "l-1");
    assert!((loan.max_loan_limit - 2500.0).abs() < f64::EPSILON);
    assert!(loan.required_documents.is_empty());
    assert_eq!(loan.cover_image(), Some("https://x.io/a.png"));
}

#[test]
fn cover_image_is_first_image() {
    let l = loan("l-1", "Stall", "Business", false);
    assert_eq!(l.cover_image(), Some("https://img.example.com/cover.png"));
}

#[test]
fn amount_bound_is_inclusive_and_positive() {
    let l = loan("l-1", "Stall", "Business", false);
    assert!(l.allows_amount(1000.0));
    assert!(l.allows_amount(0.01));
    assert!(!l.allows_amount(1000.01));
    assert!(!l.allows_amount(0.0));
}

#[test]
fn edit_rights_follow_role_and_ownership() {
    let l = loan("l-1", "Stall", "Business", false);
    assert!(l.can_edit("anyone@example.com", Role::Admin));
    assert!(l.can_edit("MGR@example.com", Role::Manager));
    assert!(!l.can_edit("other@example.com", Role::Manager));
    assert!(!l.can_edit("mgr@example.com", Role::Borrower));
}

#[test]
fn catalog_filter_combines_search_and_category() {
    let loans = vec![
        loan("1", "Market Stall", "Business", false),
        loan("2", "School Fees", "Education", false),
        loan("3", "Farm Inputs", "Agriculture", false),
    ];
    let ids = |v: Vec<&Loan>| v.into_iter().map(|l| l.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(filter_catalog(&loans, "", None)), vec!["1", "2", "3"]);
    assert_eq!(ids(filter_catalog(&loans, "school", None)), vec!["2"]);
    assert_eq!(ids(filter_catalog(&loans, "", Some("agriculture"))), vec!["3"]);
    assert!(filter_catalog(&loans, "school", Some("Business")).is_empty());
}

#[test]
fn home_loans_keep_only_featured_and_cap_count() {
    let loans: Vec<Loan> = (0..10)
        .map(|i| loan(&i.to_string(), "L", "Personal", i % 2 == 0 || i > 5))
        .collect();
    let featured = home_loans(&loans);
    assert_eq!(featured.len(), HOME_LOAN_LIMIT);
    assert!(featured.iter().all(|l| l.show_on_home));
    assert_eq!(featured[0].id, "0");
}

#[test]
fn loan_form_validates_into_payload() {
    let payload = valid_form().validate().expect("valid form");
    assert_eq!(payload.title, "Market Stall Loan");
    assert!((payload.max_loan_limit - 1000.0).abs() < f64::EPSILON);
    assert!(payload.interest_rate.abs() < f64::EPSILON);
    assert_eq!(payload.emi_plans, vec!["3 months".to_owned(), "6 months".to_owned()]);
    assert!(payload.required_documents.is_empty());
    assert!(payload.created_by.is_none());
}

#[test]
fn loan_form_rejects_negative_rate_and_zero_limit() {
    let form = LoanForm {
        interest_rate: "-1".to_owned(),
        max_loan_limit: "0".to_owned(),
        ..valid_form()
    };
    let errors = form.validate().expect_err("invalid numbers");
    assert_eq!(errors.get("interest_rate"), Some("Interest rate cannot be negative."));
    assert_eq!(errors.get("max_loan_limit"), Some("Maximum limit must be greater than zero."));
}

#[test]
fn loan_form_requires_plans_and_images() {
    let form = LoanForm {
        emi_plans: " , ".to_owned(),
        images: String::new(),
        ..valid_form()
    };
    let errors = form.validate().expect_err("missing lists");
    assert!(errors.contains("emi_plans"));
    assert_eq!(errors.get("images"), Some("Add at least one image URL."));
}

#[test]
fn loan_form_rejects_non_http_images() {
    let form = LoanForm { images: "a.png".to_owned(), ..valid_form() };
    let errors = form.validate().expect_err("bad url");
    assert!(errors.contains("images"));
}

#[test]
fn loan_form_prefills_from_loan() {
    let form = LoanForm::from_loan(&loan("l-1", "Stall", "Business", true));
    assert_eq!(form.max_loan_limit, "1000");
    assert_eq!(form.interest_rate, "7.5");
    assert_eq!(form.emi_plans, "3 months, 6 months");
    assert!(form.show_on_home);
    assert!(form.validate().is_ok());
}

#[test]
fn payload_omits_created_by_when_unset() {
    let json = serde_json::to_value(valid_form().validate().unwrap()).unwrap();
    assert!(json.get("createdBy").is_none());
    assert_eq!(json["maxLoanLimit"], serde_json::json!(1000.0));
    assert_eq!(json["showOnHome"], serde_json::json!(true));
}
