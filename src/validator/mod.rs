mod domain;
mod local;
mod types;

pub use types::{
    ClassificationReport, DOMAIN_MAX_LEN, DOMAIN_MIN_LEN, EmailError, LOCAL_MAX_LEN, Rule,
    Verdict,
};

use domain::check_domain;
use local::check_local;

/// Runs the numbered rules against `text` and stops at the first one broken.
pub fn check(text: &str) -> Verdict {
    let verdict = Verdict::from(run_rules(text));

    #[cfg(feature = "with-tracing")]
    match verdict {
        Verdict::Valid => tracing::trace!(len = text.len(), "address accepted"),
        Verdict::Invalid(rule) => {
            tracing::debug!(code = rule.code(), len = text.len(), "address rejected: {rule}")
        }
    }

    verdict
}

/// `0` for a valid address, otherwise the number (1..=7) of the first rule
/// `text` breaks.
///
/// ```
/// assert_eq!(parseaddr::classify("jsmith@example.com"), 0);
/// assert_eq!(parseaddr::classify("double..dots@example.com"), 5);
/// ```
pub fn classify(text: &str) -> u8 {
    check(text).code()
}

/// Même classement que [`classify`], avec le découpage et la raison en clair.
pub fn classify_report(text: &str) -> ClassificationReport {
    let verdict = check(text);
    // découpe même si invalide, pour montrer ce qu'on a vu
    let (local, domain) = text.split_once('@').unwrap_or_default();
    ClassificationReport {
        original: text.to_string(),
        local: local.to_string(),
        domain: domain.to_string(),
        code: verdict.code(),
        valid: verdict.is_valid(),
        reason: verdict.rule().map(|rule| rule.description().to_string()),
    }
}

/// Classifies a dynamically typed value. Anything but a JSON string is a
/// contract violation, never a rule code.
#[cfg(feature = "with-serde")]
pub fn classify_value(value: &serde_json::Value) -> Result<u8, EmailError> {
    expect_str(value).map(classify)
}

#[cfg(feature = "with-serde")]
pub fn report_value(value: &serde_json::Value) -> Result<ClassificationReport, EmailError> {
    expect_str(value).map(classify_report)
}

#[cfg(feature = "with-serde")]
fn expect_str(value: &serde_json::Value) -> Result<&str, EmailError> {
    use serde_json::Value;

    let found = match value {
        Value::String(text) => return Ok(text.as_str()),
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    Err(EmailError::TypeMismatch { found })
}

fn run_rules(text: &str) -> Result<(), Rule> {
    let (local, domain) = split_address(text).ok_or(Rule::MissingPart)?;
    check_domain(domain)?;
    check_local(local)
}

/// Coupe au premier '@'; `None` si l'une des deux parties est vide.
fn split_address(text: &str) -> Option<(&str, &str)> {
    match text.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Some((local, domain)),
        _ => None,
    }
}
