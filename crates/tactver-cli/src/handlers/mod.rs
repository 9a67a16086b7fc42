//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext<B>, ..., out: &mut impl Write) -> Result<(), CliError>`
//! - Validate CLI input into domain types
//! - Call the client
//! - Format output onto `out`

pub mod snapshot;
pub mod versions;
