use ig_app::SessionCommand;
use ig_core::AppConfig;
use tracing::{info, info_span, warn, Instrument};

use super::wiring::{wire_session, WiredSession};

/// Run the session over stdin/stdout until EOF or Ctrl-C.
pub async fn run_stdio(config: AppConfig) -> anyhow::Result<()> {
    let WiredSession {
        runtime, handle, ..
    } = wire_session(&config, tokio::io::stdin(), tokio::io::stdout());

    let span = info_span!("igloo_sync.run");
    async move {
        let mut task = tokio::spawn(runtime.run());
        handle.send(SessionCommand::Refresh).await?;

        tokio::select! {
            finished = &mut task => {
                finished?;
                info!("session ended with its input stream");
            }
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    warn!(error = %err, "ctrl-c handler failed, shutting down");
                }
                info!("shutting down");
                // The loop may already be gone; either way it shuts down.
                let _ = handle.shutdown().await;
                task.await?;
            }
        }
        Ok(())
    }
    .instrument(span)
    .await
}
