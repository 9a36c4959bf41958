use crate::error::{ExitError, IntoExitError};

/// Wraps a CLI action so every failure carries an explicit exit status.
///
/// Errors implementing [`HasExitCode`](crate::error::HasExitCode) keep their
/// status, as does an [`ExitError`] inside an `anyhow::Error`. Anything else
/// gets the generic failure status.
pub fn exit_coder<C, F, E>(action: F) -> impl Fn(&C) -> Result<(), ExitError>
where
    C: ?Sized,
    F: Fn(&C) -> Result<(), E>,
    E: IntoExitError,
{
    move |ctx: &C| action(ctx).map_err(IntoExitError::into_exit_error)
}
