use std::fmt;

use thiserror::Error;

/// Minimum domain length, in characters.
pub const DOMAIN_MIN_LEN: usize = 3;
/// Maximum domain length, in characters.
pub const DOMAIN_MAX_LEN: usize = 256;
/// Maximum local-part length, in characters.
pub const LOCAL_MAX_LEN: usize = 128;

/// Numbered rules, in evaluation order. The discriminant is the code
/// reported to callers.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rule {
    MissingPart = 1,
    DomainSyntax = 2,
    DomainDash = 3,
    LocalSyntax = 4,
    ConsecutiveDots = 5,
    UnbalancedQuote = 6,
    UnquotedPunctuation = 7,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::MissingPart,
        Rule::DomainSyntax,
        Rule::DomainDash,
        Rule::LocalSyntax,
        Rule::ConsecutiveDots,
        Rule::UnbalancedQuote,
        Rule::UnquotedPunctuation,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.code() == code)
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::MissingPart => "local part and domain must both be present around '@'",
            Rule::DomainSyntax => {
                "domain must be 3..=256 chars of non-empty labels made of [a-z0-9_-]"
            }
            Rule::DomainDash => "domain label cannot start/end with '-'",
            Rule::LocalSyntax => {
                "local part must be at most 128 chars of [a-z0-9._-] (plus !,: when quoted)"
            }
            Rule::ConsecutiveDots => "local part cannot contain '..'",
            Rule::UnbalancedQuote => "local part has an unbalanced '\"'",
            Rule::UnquotedPunctuation => "'!', ',' and ':' are only allowed inside quotes",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of one classification. Never an error: every string gets a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Rule),
}

impl Verdict {
    /// `0` when valid, otherwise the number of the first violated rule.
    pub fn code(self) -> u8 {
        match self {
            Verdict::Valid => 0,
            Verdict::Invalid(rule) => rule.code(),
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn rule(self) -> Option<Rule> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(rule) => Some(rule),
        }
    }
}

impl From<Result<(), Rule>> for Verdict {
    fn from(outcome: Result<(), Rule>) -> Self {
        match outcome {
            Ok(()) => Verdict::Valid,
            Err(rule) => Verdict::Invalid(rule),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReport {
    pub original: String,
    pub local: String,
    pub domain: String,
    pub code: u8,
    pub valid: bool,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The value handed to the classifier is not a string.
    #[error("expecting a string, got {found}")]
    TypeMismatch { found: &'static str },
}
