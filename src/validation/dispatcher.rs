use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::core::{ProbeError, ProbeOutcome};
use crate::reporting::logging;
use crate::ui::ProgressReporter;
use crate::validation::context::CheckContext;
use crate::validation::probe::Probe;

/// Runs one probe per URL concurrently and joins them all.
///
/// There is no concurrency cap: every URL gets its own task immediately.
pub struct Dispatcher<P> {
    probe: Arc<P>,
}

impl<P> Clone for Dispatcher<P> {
    fn clone(&self) -> Self {
        Self {
            probe: Arc::clone(&self.probe),
        }
    }
}

impl<P: Probe + 'static> Dispatcher<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe: Arc::new(probe),
        }
    }

    /// Check `urls` under a fresh context that expires after `timeout`.
    pub async fn check_with_timeout(
        &self,
        urls: &[String],
        timeout: Duration,
        progress: Option<&mut ProgressReporter>,
    ) -> Vec<ProbeOutcome> {
        let ctx = CheckContext::with_timeout(timeout);
        self.dispatch(urls, &ctx, progress).await
    }

    /// Check every URL under the shared `ctx`.
    ///
    /// The returned outcomes are index-aligned with `urls` regardless of
    /// completion order, and the call returns only after every probe has
    /// finished or been cancelled.
    pub async fn dispatch(
        &self,
        urls: &[String],
        ctx: &CheckContext,
        progress: Option<&mut ProgressReporter>,
    ) -> Vec<ProbeOutcome> {
        logging::log_dispatch_start(urls.len());

        let ticker = progress.and_then(|prog| {
            prog.start_checking(urls.len());
            prog.ticker()
        });
        let start = Instant::now();

        let handles: Vec<_> = urls
            .iter()
            .map(|url| {
                let probe = Arc::clone(&self.probe);
                let ctx = ctx.clone();
                let url = url.clone();
                let ticker = ticker.clone();
                tokio::spawn(async move {
                    let outcome = probe.probe(&url, &ctx).await;
                    if let Some(pb) = ticker {
                        pb.inc(1);
                    }
                    outcome
                })
            })
            .collect();

        // join_all yields in spawn order, so slot i always holds url i.
        join_all(handles)
            .await
            .into_iter()
            .zip(urls)
            .map(|(joined, url)| {
                joined.unwrap_or_else(|err| {
                    // The task died before it could tick
                    if let Some(pb) = &ticker {
                        pb.inc(1);
                    }
                    logging::log_warning(&format!("Probe task for {url} failed: {err}"));
                    ProbeOutcome::failure(
                        url.as_str(),
                        ProbeError::TaskFailed(err.to_string()),
                        start.elapsed(),
                    )
                })
            })
            .collect()
    }
}
