#![forbid(unsafe_code)]
//! parseaddr — classement d'adresses e-mail selon des règles numérotées.
//!
//! [`classify`] returns `0` for a valid address, or the number of the first
//! rule the address breaks:
//!
//! 1. both sides of the first `@` are non-empty
//! 2. the domain is 3..=256 chars of non-empty `[a-z0-9_-]` labels
//! 3. no domain label starts or ends with `-`
//! 4. the local part is at most 128 chars of `[a-z0-9._-]` (`!,:` allowed when quoted)
//! 5. the local part has no `..`
//! 6. every `"` in the local part is paired
//! 7. `!`, `,` and `:` only appear inside quotes

pub mod validator;
#[cfg(feature = "with-serde")]
pub use validator::{classify_value, report_value};
pub use validator::{
    ClassificationReport, DOMAIN_MAX_LEN, DOMAIN_MIN_LEN, EmailError, LOCAL_MAX_LEN, Rule,
    Verdict, check, classify, classify_report,
};
