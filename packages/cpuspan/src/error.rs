use thiserror::Error;

/// Errors that can occur when processing processor span descriptors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a supposed span descriptor but it did not match the expected format.
    #[error("invalid span descriptor: '{invalid_value}' is invalid: {problem}")]
    InvalidSyntax {
        /// The specific value that was invalid. This may either be the entire descriptor
        /// or a specific part of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

impl Error {
    pub(crate) fn new(invalid_value: String, problem: String) -> Self {
        Self::InvalidSyntax {
            invalid_value,
            problem,
        }
    }

    pub(crate) fn caused_by(
        invalid_value: String,
        problem: String,
        inner: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidSyntax {
            invalid_value,
            problem: format!("{problem}: {inner}"),
        }
    }
}

/// A specialized `Result` type for span descriptor operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn invalid_syntax_is_error() {
        let error = Error::new("abc".to_string(), "not a number".to_string());

        // Verify it is a valid Error that can be used in Result context.
        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }
}
