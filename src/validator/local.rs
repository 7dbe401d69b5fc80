use std::sync::LazyLock;

use phf::phf_set;
use regex::Regex;

use super::types::{LOCAL_MAX_LEN, Rule};

/// Ponctuation admise dans la partie locale (entre guillemets ou non).
const LOCAL_PUNCT: phf::Set<char> = phf_set! { '.', '_', '-', '!', ',', ':' };

/// Sous-ensemble de `LOCAL_PUNCT` réservé aux segments entre guillemets.
const QUOTED_ONLY: phf::Set<char> = phf_set! { '!', ',', ':' };

// Shortest span from one '"' to the next; find_iter never overlaps matches.
static QUOTED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*""#).expect("quoted span pattern"));

/// One piece of a local part: text between quoted spans, or a quoted span
/// with its delimiting quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Unquoted(&'a str),
    Quoted(&'a str),
}

/// Découpe `local` en `[N0, Q0, N1, Q1, ..., Nk]`. The list always starts and
/// ends with an `Unquoted` segment, possibly empty.
pub(crate) fn segments(local: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for span in QUOTED_SPAN.find_iter(local) {
        out.push(Segment::Unquoted(&local[last..span.start()]));
        out.push(Segment::Quoted(span.as_str()));
        last = span.end();
    }
    out.push(Segment::Unquoted(&local[last..]));
    out
}

pub(crate) fn check_local(local: &str) -> Result<(), Rule> {
    if local.chars().count() > LOCAL_MAX_LEN {
        return Err(Rule::LocalSyntax);
    }
    if local.contains("..") {
        return Err(Rule::ConsecutiveDots);
    }

    for segment in segments(local) {
        match segment {
            Segment::Unquoted(text) => {
                if text.contains('"') {
                    return Err(Rule::UnbalancedQuote);
                }
                if !text.chars().all(is_local_char) {
                    return Err(Rule::LocalSyntax);
                }
                if text.chars().any(|c| QUOTED_ONLY.contains(&c)) {
                    return Err(Rule::UnquotedPunctuation);
                }
            }
            Segment::Quoted(text) => {
                let inner = text
                    .strip_prefix('"')
                    .and_then(|t| t.strip_suffix('"'))
                    .unwrap_or(text);
                if !inner.chars().all(is_local_char) {
                    return Err(Rule::LocalSyntax);
                }
            }
        }
    }

    Ok(())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || LOCAL_PUNCT.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Segment::{Quoted, Unquoted};

    #[test]
    fn segments_plain() {
        assert_eq!(segments("jsmith"), vec![Unquoted("jsmith")]);
        assert_eq!(segments(""), vec![Unquoted("")]);
    }

    #[test]
    fn segments_are_shortest_and_non_overlapping() {
        assert_eq!(
            segments("\"a\"b\"c\""),
            vec![Unquoted(""), Quoted("\"a\""), Unquoted("b"), Quoted("\"c\""), Unquoted("")]
        );
        assert_eq!(
            segments("\"\"\"\""),
            vec![Unquoted(""), Quoted("\"\""), Unquoted(""), Quoted("\"\""), Unquoted("")]
        );
    }

    #[test]
    fn stray_quote_lands_in_trailing_segment() {
        assert_eq!(
            segments("\"\"\""),
            vec![Unquoted(""), Quoted("\"\""), Unquoted("\"")]
        );
        assert_eq!(segments("missing\"quote"), vec![Unquoted("missing\"quote")]);
    }

    #[test]
    fn length_limit() {
        assert_eq!(check_local(&"x".repeat(128)), Ok(()));
        assert_eq!(check_local(&"x".repeat(129)), Err(Rule::LocalSyntax));
    }

    #[test]
    fn dots() {
        assert_eq!(check_local(".dots."), Ok(()));
        assert_eq!(check_local("a..b"), Err(Rule::ConsecutiveDots));
        // dots are checked before quotes are even looked at
        assert_eq!(check_local("\"..\""), Err(Rule::ConsecutiveDots));
        assert_eq!(check_local("\"a..!"), Err(Rule::ConsecutiveDots));
    }

    #[test]
    fn quotes() {
        assert_eq!(check_local("\"\""), Ok(()));
        assert_eq!(check_local("\"double\"_\"quotes\""), Ok(()));
        assert_eq!(check_local("\""), Err(Rule::UnbalancedQuote));
        assert_eq!(check_local("\"missing\"quote\""), Err(Rule::UnbalancedQuote));
    }

    #[test]
    fn punctuation_only_inside_quotes() {
        assert_eq!(check_local("\"!,:\""), Ok(()));
        assert_eq!(check_local("exclamation!point"), Err(Rule::UnquotedPunctuation));
        assert_eq!(check_local("colon:"), Err(Rule::UnquotedPunctuation));
    }

    #[test]
    fn foreign_chars_beat_punctuation() {
        assert_eq!(check_local("a!B"), Err(Rule::LocalSyntax));
        assert_eq!(check_local("\"A\""), Err(Rule::LocalSyntax));
        assert_eq!(check_local("\"a b\""), Err(Rule::LocalSyntax));
    }

    #[test]
    fn quoted_span_may_cross_a_newline() {
        assert_eq!(segments("\"\n\""), vec![Unquoted(""), Quoted("\"\n\""), Unquoted("")]);
        assert_eq!(check_local("\"\n\""), Err(Rule::LocalSyntax));
    }

    #[test]
    fn segments_are_checked_left_to_right() {
        // the quoted span fails before the stray quote after it is reached
        assert_eq!(check_local("\"A\"x\""), Err(Rule::LocalSyntax));
        // the unquoted '!' fails before the bad quoted span
        assert_eq!(check_local("a!\"A\""), Err(Rule::UnquotedPunctuation));
    }
}
