//! Download handler.
//!
//! Resolves a track, runs the download-and-tag pipeline and renders its
//! events. The first Ctrl-C cancels the running job; a second one stops
//! waiting for it.

use std::path::PathBuf;

use anyhow::Result;
use tokio::signal;
use tokio::sync::mpsc;
use trackdl_core::DownloadError;
use trackdl_download::JobHandle;

use super::resolve_track;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::JobProgress;

/// Execute the download command.
pub async fn execute(ctx: &CliContext, url: &str) -> Result<()> {
    let progress = JobProgress::new();
    let mut interrupts = ctrl_c_events();
    let outcome = run(ctx, url, &progress, &mut interrupts).await;
    progress.finish();

    let path = outcome?;
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    println!("Downloaded: {file_name}");
    Ok(())
}

async fn run(
    ctx: &CliContext,
    url: &str,
    progress: &JobProgress,
    interrupts: &mut mpsc::UnboundedReceiver<()>,
) -> Result<PathBuf, CliError> {
    let track = resolve_track(ctx.lookup.as_ref(), url, &ctx.cookies).await?;
    tracing::info!(
        name = track.name().unwrap_or_default(),
        artist = track.artist().unwrap_or_default(),
        "Track resolved"
    );

    let job = ctx.pipeline.spawn(track, &ctx.output_dir);
    follow(job, progress, interrupts).await
}

/// Forward every Ctrl-C as a message.
fn ctrl_c_events() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while signal::ctrl_c().await.is_ok() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Render a job's events until its terminal event.
///
/// The first interrupt requests cancellation and the job then ends on its
/// own with a `Cancelled` event. A second interrupt returns right away
/// without waiting for the job to reach a cancellation point.
async fn follow(
    mut job: JobHandle,
    progress: &JobProgress,
    interrupts: &mut mpsc::UnboundedReceiver<()>,
) -> Result<PathBuf, CliError> {
    let mut cancel_requested = false;

    loop {
        let event = tokio::select! {
            event = job.next_event() => event,

            Some(()) = interrupts.recv() => {
                if cancel_requested {
                    tracing::warn!(job_id = %job.id(), "Interrupted again, not waiting for the job");
                    return Err(CliError::Download(DownloadError::Cancelled));
                }
                tracing::info!(job_id = %job.id(), "Cancellation requested");
                cancel_requested = true;
                job.cancel();
                continue;
            }
        };

        let Some(event) = event else {
            // Channel closed without a terminal event; the task result says why.
            return job.wait().await.map_err(CliError::from);
        };

        progress.update(&event);
        if let Some(outcome) = event.into_outcome() {
            return outcome.map_err(CliError::from);
        }
    }
}
