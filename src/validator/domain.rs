use super::types::{DOMAIN_MAX_LEN, DOMAIN_MIN_LEN, Rule};

/// Valide le domaine: longueur, alphabet des labels, puis tirets en bord de label.
///
/// Every label goes through the alphabet check before any dash check runs,
/// so a later label with a bad character wins over an earlier dashed one.
pub(crate) fn check_domain(domain: &str) -> Result<(), Rule> {
    let len = domain.chars().count();
    if !(DOMAIN_MIN_LEN..=DOMAIN_MAX_LEN).contains(&len) {
        return Err(Rule::DomainSyntax);
    }

    if !domain.split('.').all(is_label_syntax) {
        return Err(Rule::DomainSyntax);
    }

    if domain
        .split('.')
        .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return Err(Rule::DomainDash);
    }

    Ok(())
}

fn is_label_syntax(label: &str) -> bool {
    !label.is_empty()
        && label
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}
