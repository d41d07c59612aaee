//! Line classification.
//!
//! Every DSL line is exactly one construct. Some patterns overlap, e.g.
//! `cpp[x] .` fits both the code and the description pattern, so the order
//! of [`classify`] is part of the language:
//!
//! ```text
//! Comment > Signature > CodeExpression > EquivalentExpression > Description > SectionHeader
//! ```
//!
//! Anything else is [`LineKind::Insignificant`] and is skipped by the parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"^#").unwrap();
    static ref SIGNATURE: Regex = Regex::new(r"^(\w+)\((.+)\)$").unwrap();
    static ref CODE_EXPRESSION: Regex = Regex::new(r"^cpp\[(.+)\]").unwrap();
    static ref EQUIVALENT: Regex = Regex::new(r"^eq\[(.+)\]").unwrap();
    static ref DESCRIPTION: Regex = Regex::new(r"^\w.*\.$").unwrap();
    static ref SECTION: Regex = Regex::new(r"^\w+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
pub enum LineKind {
    #[strum(to_string = "comment")]
    Comment,
    #[strum(to_string = "signature")]
    Signature { name: String, params: String },
    #[strum(to_string = "code")]
    CodeExpression(String),
    #[strum(to_string = "equivalent")]
    EquivalentExpression(String),
    #[strum(to_string = "description")]
    Description(String),
    #[strum(to_string = "section header")]
    SectionHeader(String),
    #[strum(to_string = "insignificant")]
    Insignificant,
}

/// Classifies a single line. The line terminator must already be stripped.
#[tracing::instrument(level = "debug")]
pub fn classify(line: &str) -> LineKind {
    if COMMENT.is_match(line) {
        return LineKind::Comment;
    }

    if let Some(caps) = SIGNATURE.captures(line) {
        return LineKind::Signature {
            name: caps[1].to_string(),
            params: caps[2].to_string(),
        };
    }

    if let Some(caps) = CODE_EXPRESSION.captures(line) {
        return LineKind::CodeExpression(caps[1].to_string());
    }

    if let Some(caps) = EQUIVALENT.captures(line) {
        return LineKind::EquivalentExpression(caps[1].to_string());
    }

    if DESCRIPTION.is_match(line) {
        return LineKind::Description(line.to_string());
    }

    if SECTION.is_match(line) {
        return LineKind::SectionHeader(line.to_string());
    }

    LineKind::Insignificant
}
