use crate::parser::{self, IntegerSequence};
use crate::sorter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    #[error("Too many numbers: got {count}, at most {limit} are accepted")]
    TooManyNumbers { count: usize, limit: usize },
}

/// What a single sort request produces for display: the raw input, the
/// parsed sequence and a sorted copy of it.
///
/// `original` and `sorted` are both `None` when no usable input was given,
/// which is different from both being empty (input with no valid integers).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOutcome {
    pub input: Option<String>,
    pub original: Option<IntegerSequence>,
    pub sorted: Option<IntegerSequence>,
}

impl SortOutcome {
    pub fn from_input(input: Option<&str>) -> Self {
        let original = input.and_then(parser::parse_integers);
        Self::build(input, original)
    }

    /// Like [`SortOutcome::from_input`], but refuses to sort sequences longer
    /// than `limit`.
    pub fn with_limit(input: Option<&str>, limit: usize) -> Result<Self, OutcomeError> {
        let original = input.and_then(parser::parse_integers);

        if let Some(numbers) = &original {
            if numbers.len() > limit {
                return Err(OutcomeError::TooManyNumbers {
                    count: numbers.len(),
                    limit,
                });
            }
        }

        Ok(Self::build(input, original))
    }

    fn build(input: Option<&str>, original: Option<IntegerSequence>) -> Self {
        let sorted = original.as_deref().map(sorter::sorted_copy);

        Self {
            input: input.map(str::to_string),
            original,
            sorted,
        }
    }

    /// Number of parsed integers, zero when there was no input.
    pub fn count(&self) -> usize {
        self.original.as_ref().map_or(0, Vec::len)
    }
}
