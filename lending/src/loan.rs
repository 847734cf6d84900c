//! Loan products published by managers.

#[cfg(test)]
#[path = "loan_test.rs"]
mod loan_test;

use serde::{Deserialize, Serialize};

use crate::user::{Role, same_email};
use crate::validate::{self, FieldErrors};

/// Maximum number of featured loans rendered on the landing page.
pub const HOME_LOAN_LIMIT: usize = 6;

/// Categories offered by the loan form and catalog filter.
pub const CATEGORIES: [&str; 6] = [
    "Personal",
    "Business",
    "Education",
    "Agriculture",
    "Emergency",
    "Home Improvement",
];

/// A published loan product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Interest rate as a percentage.
    pub interest_rate: f64,
    /// Upper bound for any application amount against this loan.
    pub max_loan_limit: f64,
    #[serde(default)]
    pub emi_plans: Vec<String>,
    /// Image URLs; the first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub show_on_home: bool,
    /// Email of the manager who published the loan.
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Loan {
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Admins edit any loan; managers only their own.
    #[must_use]
    pub fn can_edit(&self, actor_email: &str, actor_role: Role) -> bool {
        match actor_role {
            Role::Admin => true,
            Role::Manager => same_email(&self.created_by, actor_email),
            Role::Borrower => false,
        }
    }

    #[must_use]
    pub fn allows_amount(&self, amount: f64) -> bool {
        amount > 0.0 && amount <= self.max_loan_limit
    }

    /// Case-insensitive match against title, category and description.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.category, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Catalog filtering applied client-side on the all-loans page.
#[must_use]
pub fn filter_catalog<'a>(loans: &'a [Loan], search: &str, category: Option<&str>) -> Vec<&'a Loan> {
    loans
        .iter()
        .filter(|loan| loan.matches_search(search))
        .filter(|loan| category.map_or(true, |c| loan.category.eq_ignore_ascii_case(c)))
        .collect()
}

/// Featured loans for the landing page, in backend order.
#[must_use]
pub fn home_loans(loans: &[Loan]) -> Vec<&Loan> {
    loans
        .iter()
        .filter(|loan| loan.show_on_home)
        .take(HOME_LOAN_LIMIT)
        .collect()
}

/// Create/update body for a loan product.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub interest_rate: f64,
    pub max_loan_limit: f64,
    pub emi_plans: Vec<String>,
    pub images: Vec<String>,
    pub required_documents: Vec<String>,
    pub show_on_home: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Raw loan form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub interest_rate: String,
    pub max_loan_limit: String,
    /// Comma-separated EMI plan labels.
    pub emi_plans: String,
    /// Comma-separated image URLs, cover first.
    pub images: String,
    /// Comma-separated required document names.
    pub required_documents: String,
    pub show_on_home: bool,
}

impl LoanForm {
    /// Prefill the form for editing an existing loan.
    #[must_use]
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            title: loan.title.clone(),
            description: loan.description.clone(),
            category: loan.category.clone(),
            interest_rate: loan.interest_rate.to_string(),
            max_loan_limit: loan.max_loan_limit.to_string(),
            emi_plans: loan.emi_plans.join(", "),
            images: loan.images.join(", "),
            required_documents: loan.required_documents.join(", "),
            show_on_home: loan.show_on_home,
        }
    }

    /// Validate the form into a create/update payload.
    ///
    /// # Errors
    ///
    /// Returns per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<LoanPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = validate::required(&mut errors, "title", &self.title, "Enter a title.");
        let description =
            validate::required(&mut errors, "description", &self.description, "Enter a description.");
        let category = validate::required(&mut errors, "category", &self.category, "Choose a category.");

        let interest_rate = match validate::parse_number(&self.interest_rate) {
            Some(rate) if rate >= 0.0 => rate,
            Some(_) => {
                errors.insert("interest_rate", "Interest rate cannot be negative.");
                0.0
            }
            None => {
                errors.insert("interest_rate", "Enter an interest rate.");
                0.0
            }
        };
        let max_loan_limit = match validate::parse_number(&self.max_loan_limit) {
            Some(limit) if limit > 0.0 => limit,
            Some(_) => {
                errors.insert("max_loan_limit", "Maximum limit must be greater than zero.");
                0.0
            }
            None => {
                errors.insert("max_loan_limit", "Enter a maximum loan limit.");
                0.0
            }
        };

        let emi_plans = validate::split_list(&self.emi_plans);
        if emi_plans.is_empty() {
            errors.insert("emi_plans", "Add at least one EMI plan.");
        }
        let images = validate::split_list(&self.images);
        if images.is_empty() {
            errors.insert("images", "Add at least one image URL.");
        } else if images.iter().any(|url| !validate::is_http_url(url)) {
            errors.insert("images", "Image URLs must start with http:// or https://.");
        }

        errors.into_result(LoanPayload {
            title,
            description,
            category,
            interest_rate,
            max_loan_limit,
            emi_plans,
            images,
            required_documents: validate::split_list(&self.required_documents),
            show_on_home: self.show_on_home,
            created_by: None,
        })
    }
}
