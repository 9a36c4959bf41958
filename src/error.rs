//! Error types shared by the helpers and the command layer.

use std::fmt;

use thiserror::Error;

use crate::constants::GENERIC_FAILURE_EXIT_CODE;

/// Malformed input handed to one of the parsing helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid size: {input:?}")]
    Size { input: String },

    #[error("invalid template: {0}")]
    Template(#[source] minijinja::Error),

    #[error("template is not valid UTF-8: {0}")]
    TemplateEncoding(#[from] std::str::Utf8Error),

    #[error("invalid extra resources: {0}")]
    ExtraResources(#[from] serde_json::Error),
}

/// A template parsed fine but failed while executing.
#[derive(Debug, Error)]
#[error("template render failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Failure of an environment template expansion.
///
/// Both variants hand back a buffer: the untouched input when the template
/// could not be parsed, or the partial output when rendering stopped midway.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template could not be parsed")]
    Parse {
        #[source]
        source: ParseError,
        original: Vec<u8>,
    },

    #[error("template could not be rendered")]
    Render {
        #[source]
        source: RenderError,
        partial: Vec<u8>,
    },
}

impl TemplateError {
    pub fn output(&self) -> &[u8] {
        match self {
            TemplateError::Parse { original, .. } => original,
            TemplateError::Render { partial, .. } => partial,
        }
    }

    pub fn into_output(self) -> Vec<u8> {
        match self {
            TemplateError::Parse { original, .. } => original,
            TemplateError::Render { partial, .. } => partial,
        }
    }
}

/// Capability of an error value to carry an explicit process exit status.
pub trait HasExitCode {
    fn exit_code(&self) -> i32;
}

/// An error paired with the exit status the process should terminate with.
#[derive(Debug)]
pub struct ExitError {
    source: anyhow::Error,
    code: i32,
}

impl ExitError {
    pub fn new(
        source: impl Into<anyhow::Error>,
        code: i32,
    ) -> Self {
        Self {
            source: source.into(),
            code,
        }
    }

    /// Wraps `source` with the generic failure status.
    pub fn generic(source: impl Into<anyhow::Error>) -> Self {
        Self::new(source, GENERIC_FAILURE_EXIT_CODE)
    }

    /// Wraps an error that knows its own exit status, keeping that status.
    pub fn coded<E>(source: E) -> Self
    where
        E: HasExitCode + std::error::Error + Send + Sync + 'static,
    {
        let code = source.exit_code();
        match anyhow::Error::new(source).downcast::<ExitError>() {
            Ok(exit) => exit,
            Err(other) => Self::new(other, code),
        }
    }

    pub fn inner(&self) -> &anyhow::Error {
        &self.source
    }
}

impl HasExitCode for ExitError {
    fn exit_code(&self) -> i32 {
        self.code
    }
}

/// Conversion of an action's error into an [`ExitError`].
///
/// Any error type implementing [`HasExitCode`] converts with its own status.
/// A type-erased `anyhow::Error` keeps the status of an [`ExitError`] it
/// wraps, directly or under added context, and gets the generic status
/// otherwise.
pub trait IntoExitError {
    fn into_exit_error(self) -> ExitError;
}

impl<E> IntoExitError for E
where
    E: HasExitCode + std::error::Error + Send + Sync + 'static,
{
    fn into_exit_error(self) -> ExitError {
        ExitError::coded(self)
    }
}

impl IntoExitError for anyhow::Error {
    fn into_exit_error(self) -> ExitError {
        match self.downcast::<ExitError>() {
            Ok(exit) => exit,
            Err(other) => ExitError::generic(other),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for ExitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn exit_error_displays_top_message_and_keeps_chain() {
        let err = Err::<(), _>(anyhow!("disk full"))
            .context("writing manifest")
            .unwrap_err();
        let exit = ExitError::new(err, 4);
        assert_eq!(exit.exit_code(), 4);
        assert_eq!(exit.to_string(), "writing manifest");
        let wrapped = anyhow::Error::new(exit);
        assert_eq!(format!("{wrapped:#}"), "writing manifest: disk full");
    }

    #[test]
    fn template_error_hands_back_its_buffer() {
        let err = TemplateError::Parse {
            source: ParseError::Size {
                input: "x".into(),
            },
            original: b"raw".to_vec(),
        };
        assert_eq!(err.output(), b"raw");
        assert_eq!(err.into_output(), b"raw".to_vec());
    }
}
