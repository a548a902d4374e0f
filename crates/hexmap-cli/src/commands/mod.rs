//! Command implementations for the hexmap CLI.
//!
//! Each command module turns resolved settings into work and formats the
//! result according to the requested output format.

use hexmap_core::cli::ExitCode;

pub mod completions;
pub mod generate;
pub mod tiles;

/// Picks the exit code for a failed command.
///
/// The first [`hexmap_core::Error`] in the cause chain decides the code;
/// any other failure maps to [`ExitCode::ERROR`].
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<hexmap_core::Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
