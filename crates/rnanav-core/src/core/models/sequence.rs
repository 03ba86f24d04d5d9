use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
    #[error("Invalid nucleotide '{base}' at position {position}. Expected one of A, U, G, C.")]
    InvalidBase { base: char, position: usize },
}

/// A non-empty, upper-case ribonucleotide sequence over `{A, U, G, C}`.
///
/// Construction through [`Sequence::parse`] is the only way to obtain a value,
/// so every `Sequence` is guaranteed to have at least one base. This is what
/// allows [`Sequence::gc_fraction`] to divide by the length unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(String);

impl Sequence {
    /// Validates and canonicalizes a raw sequence.
    ///
    /// Surrounding ASCII whitespace is ignored and lower-case bases are
    /// accepted. Other whitespace counts as an invalid base.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return Err(SequenceError::Empty);
        }

        let mut canonical = String::with_capacity(trimmed.len());
        for (idx, ch) in trimmed.chars().enumerate() {
            let upper = ch.to_ascii_uppercase();
            match upper {
                'A' | 'U' | 'G' | 'C' => canonical.push(upper),
                _ => {
                    return Err(SequenceError::InvalidBase {
                        base: ch,
                        position: idx + 1,
                    });
                }
            }
        }

        Ok(Self(canonical))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn gc_count(&self) -> usize {
        self.0.bytes().filter(|b| matches!(b, b'G' | b'C')).count()
    }

    /// Fraction of G and C bases, in `[0, 1]`.
    pub fn gc_fraction(&self) -> f64 {
        self.gc_count() as f64 / self.len() as f64
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_lowercase_input() {
        let seq = Sequence::parse("gggcgacug").unwrap();
        assert_eq!(seq.as_str(), "GGGCGACUG");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let seq = Sequence::parse("  AUGC\n").unwrap();
        assert_eq!(seq.as_str(), "AUGC");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_keeps_non_ascii_whitespace_as_an_invalid_base() {
        let err = Sequence::parse(" \u{00A0}AUGC").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidBase {
                base: '\u{00A0}',
                position: 1
            }
        );
        assert!(Sequence::parse("AUGC\u{2003}").is_err());
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::Empty));
        assert_eq!(Sequence::parse("   "), Err(SequenceError::Empty));
    }

    #[test]
    fn parse_rejects_dna_thymine_with_position() {
        let err = Sequence::parse("AUGTC").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidBase {
                base: 'T',
                position: 4
            }
        );
    }

    #[test]
    fn parse_rejects_interior_whitespace() {
        assert!(matches!(
            Sequence::parse("AU GC"),
            Err(SequenceError::InvalidBase { base: ' ', .. })
        ));
    }

    #[test]
    fn gc_fraction_counts_guanine_and_cytosine() {
        let seq: Sequence = "GGGCGACUGAAGCGCCC".parse().unwrap();
        assert_eq!(seq.gc_count(), 13);
        assert_eq!(seq.gc_fraction(), 13.0 / 17.0);
    }

    #[test]
    fn gc_fraction_of_au_only_sequence_is_zero() {
        let seq: Sequence = "AUAUAUAU".parse().unwrap();
        assert_eq!(seq.gc_fraction(), 0.0);
    }

    #[test]
    fn deserialize_validates_content() {
        let ok: Sequence = serde_json::from_str("\"augc\"").unwrap();
        assert_eq!(ok.as_str(), "AUGC");

        let bad: Result<Sequence, _> = serde_json::from_str("\"AUXC\"");
        assert!(bad.is_err());
    }
}
