//! Generator error type

use std::fmt;

/// Errors raised while configuring or running a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A tunable has a value the generator cannot work with
    InvalidConfig {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    /// Racks need matched words but the dictionary has none
    EmptyDictionary,

    /// The attempt budget ran out before enough racks were accepted
    AttemptsExhausted {
        attempts: u64,
        accepted: usize,
        needed: usize,
    },
}

impl GeneratorError {
    pub(crate) fn invalid(
        parameter: &'static str,
        value: &impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid {parameter} = {value}: {reason}"),
            Self::EmptyDictionary => {
                write!(f, "Dictionary is empty; no rack can reach the word minimum")
            }
            Self::AttemptsExhausted {
                attempts,
                accepted,
                needed,
            } => write!(
                f,
                "Gave up after {attempts} attempts with {accepted} of {needed} accepted"
            ),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let err = GeneratorError::invalid("tile_count", &0, "racks need at least one tile");
        assert_eq!(
            err.to_string(),
            "Invalid tile_count = 0: racks need at least one tile"
        );
    }

    #[test]
    fn display_attempts_exhausted() {
        let err = GeneratorError::AttemptsExhausted {
            attempts: 50,
            accepted: 2,
            needed: 10,
        };
        assert_eq!(
            err.to_string(),
            "Gave up after 50 attempts with 2 of 10 accepted"
        );
    }
}
