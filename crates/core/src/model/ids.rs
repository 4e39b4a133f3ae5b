use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of a quiz question, 1-based.
///
/// Renders and serializes as `q{n}` (e.g. `q3`), which is also the key used
/// by the submission endpoint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a new `QuestionId`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionIdError::Zero` because question numbers start at 1.
    pub fn new(number: u32) -> Result<Self, QuestionIdError> {
        if number == 0 {
            return Err(QuestionIdError::Zero);
        }
        Ok(Self(number))
    }

    /// Returns the 1-based question number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionIdError {
    #[error("question numbers start at 1")]
    Zero,
    #[error("invalid question id: {raw:?}")]
    Malformed { raw: String },
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = QuestionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || QuestionIdError::Malformed { raw: s.to_string() };
        let digits = s.strip_prefix('q').ok_or_else(malformed)?;
        let number: u32 = digits.parse().map_err(|_| malformed())?;
        Self::new(number)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuestionIdVisitor;

        impl Visitor<'_> for QuestionIdVisitor {
            type Value = QuestionId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a question id like \"q1\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(QuestionIdVisitor)
    }
}
