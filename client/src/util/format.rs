//! Display formatting for money, rates and backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1234.5` -> `$1,234.50`. Negative amounts keep their sign.
pub fn money(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${whole}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `5.5` -> `5.5%`.
pub fn percent(rate: f64) -> String {
    format!("{rate}%")
}

/// Date part of an ISO-8601 timestamp, or a dash when absent.
pub fn date(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or(ts).to_owned(),
        _ => "-".to_owned(),
    }
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn excerpt(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
