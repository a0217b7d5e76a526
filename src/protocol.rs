//! Textual stdin/stdout format.
//!
//! Input is whitespace-separated integers: `n k x` followed by `n` positions
//! (conventionally on a second line, but any whitespace works). Anything after
//! the `n`-th position is ignored. Output is the group count on one line.

use std::fmt::Write as _;

use thiserror::Error;

use crate::error::GroupingError;
use crate::instance::Instance;

/// Parsing failures of the textual format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("missing {0}")]
    MissingToken(&'static str),

    #[error("{what} is not an integer: {token:?}")]
    InvalidInteger { what: &'static str, token: String },

    #[error("sequence length must be non-negative, got {0}")]
    InvalidLength(i64),

    #[error("expected {expected} positions, found {found}")]
    TooFewPositions { expected: usize, found: usize },

    #[error(transparent)]
    Instance(#[from] GroupingError),
}

/// Raw, unvalidated contents of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInput {
    pub budget: i64,
    pub threshold: i64,
    pub positions: Vec<i64>,
}

impl ProblemInput {
    /// Validate into an [`Instance`].
    pub fn into_instance(self) -> Result<Instance, ProtocolError> {
        Ok(Instance::new(self.positions, self.budget, self.threshold)?)
    }
}

impl From<&Instance> for ProblemInput {
    fn from(instance: &Instance) -> Self {
        Self {
            budget: i64::try_from(instance.budget()).unwrap_or(i64::MAX),
            threshold: i64::try_from(instance.threshold().get()).unwrap_or(i64::MAX),
            positions: instance.positions().to_vec(),
        }
    }
}

/// Parse `n k x` and the `n` positions.
pub fn parse_input(text: &str) -> Result<ProblemInput, ProtocolError> {
    let mut tokens = text.split_ascii_whitespace();
    let mut next = |what: &'static str| -> Result<i64, ProtocolError> {
        let token = tokens.next().ok_or(ProtocolError::MissingToken(what))?;
        token.parse::<i64>().map_err(|_| ProtocolError::InvalidInteger {
            what,
            token: token.to_string(),
        })
    };

    let n = next("sequence length")?;
    let budget = next("budget")?;
    let threshold = next("threshold")?;
    let n = usize::try_from(n).map_err(|_| ProtocolError::InvalidLength(n))?;

    let mut positions = Vec::with_capacity(n.min(1 << 16));
    for found in 0..n {
        match next("position") {
            Ok(v) => positions.push(v),
            Err(ProtocolError::MissingToken(_)) => {
                return Err(ProtocolError::TooFewPositions { expected: n, found })
            }
            Err(e) => return Err(e),
        }
    }

    Ok(ProblemInput {
        budget,
        threshold,
        positions,
    })
}

/// Two-line rendering accepted by [`parse_input`].
pub fn format_input(input: &ProblemInput) -> String {
    let mut out = format!(
        "{} {} {}\n",
        input.positions.len(),
        input.budget,
        input.threshold
    );
    for (i, p) in input.positions.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{p}");
    }
    out.push('\n');
    out
}

/// Single-line answer.
pub fn format_output(groups: usize) -> String {
    format!("{groups}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_line_input() {
        let input = parse_input("5 3 5\n1 3 20 21 40\n").unwrap();
        assert_eq!(
            input,
            ProblemInput {
                budget: 3,
                threshold: 5,
                positions: vec![1, 3, 20, 21, 40],
            }
        );
    }

    #[test]
    fn whitespace_layout_is_free_and_extra_tokens_ignored() {
        let input = parse_input("  3\t0 2 \n\n 9\n-4 1 77 88").unwrap();
        assert_eq!(input.positions, vec![9, -4, 1]);
    }

    #[test]
    fn empty_sequence() {
        let input = parse_input("0 1 1\n").unwrap();
        assert!(input.positions.is_empty());
        assert_eq!(format_input(&input), "0 1 1\n\n");
    }

    #[test]
    fn reports_missing_header_fields() {
        assert_eq!(
            parse_input(""),
            Err(ProtocolError::MissingToken("sequence length"))
        );
        assert_eq!(
            parse_input("3 1"),
            Err(ProtocolError::MissingToken("threshold"))
        );
    }

    #[test]
    fn reports_short_sequence() {
        assert_eq!(
            parse_input("4 0 1\n1 2"),
            Err(ProtocolError::TooFewPositions {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn reports_bad_tokens() {
        assert_eq!(
            parse_input("2 0 x\n1 2"),
            Err(ProtocolError::InvalidInteger {
                what: "threshold",
                token: "x".into()
            })
        );
        assert_eq!(parse_input("-1 0 1"), Err(ProtocolError::InvalidLength(-1)));
    }

    #[test]
    fn invalid_instance_surfaces_kernel_error() {
        let err = parse_input("2 0 0\n1 2").unwrap().into_instance().unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::Instance(GroupingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn format_is_accepted_by_parser() {
        let input = ProblemInput {
            budget: 7,
            threshold: 2,
            positions: vec![5, -3, 12],
        };
        assert_eq!(format_input(&input), "3 7 2\n5 -3 12\n");
        assert_eq!(parse_input(&format_input(&input)).unwrap(), input);
        assert_eq!(format_output(4), "4\n");
    }
}
