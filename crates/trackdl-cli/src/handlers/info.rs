//! Info handler.
//!
//! Looks up a track and prints its metadata without downloading anything.

use anyhow::Result;

use super::resolve_track;
use crate::bootstrap::CliContext;
use crate::presentation::track_summary;

/// Execute the info command.
pub async fn execute(ctx: &CliContext, url: &str, json: bool) -> Result<()> {
    let track = resolve_track(ctx.lookup.as_ref(), url, &ctx.cookies).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&track)?);
    } else {
        print!("{}", track_summary(&track));
    }

    Ok(())
}
