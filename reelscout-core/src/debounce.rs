//! Trailing-edge debounce for rapidly changing text input.
//!
//! Every pushed value restarts the quiet-period timer; a value is relayed only
//! once no newer value arrived for the whole period. Intermediate values are
//! dropped. Pushing never blocks.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Quiet period applied to search text before it reaches the catalog.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Sending half: accepts raw input values.
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    tx: mpsc::UnboundedSender<String>,
}

/// Receiving half: yields settled values.
#[derive(Debug)]
pub struct SettledInput {
    rx: mpsc::UnboundedReceiver<String>,
}

impl DebouncedInput {
    /// Returns `false` once the relay has shut down.
    pub fn push(&self, value: impl Into<String>) -> bool {
        self.tx.send(value.into()).is_ok()
    }
}

impl SettledInput {
    /// Next settled value; `None` when every input handle is gone.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

/// Spawn the relay task on the current runtime.
pub fn debounced_channel(
    quiet: Duration,
) -> (DebouncedInput, SettledInput, JoinHandle<()>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (output_tx, output_rx) = mpsc::unbounded_channel();
    let relay = tokio::spawn(relay(input_rx, output_tx, quiet));
    (
        DebouncedInput { tx: input_tx },
        SettledInput { rx: output_rx },
        relay,
    )
}

async fn relay(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
    quiet: Duration,
) {
    let mut pending: Option<String> = None;

    loop {
        let Some(value) = pending.take() else {
            match input.recv().await {
                Some(value) => {
                    pending = Some(value);
                    continue;
                }
                None => break,
            }
        };

        tokio::select! {
            next = input.recv() => match next {
                Some(newer) => {
                    trace!(dropped = %value, "debounce restarted");
                    pending = Some(newer);
                }
                None => {
                    // Input closed mid-period: flush the trailing value.
                    let _ = output.send(value);
                    break;
                }
            },
            _ = tokio::time::sleep(quiet) => {
                trace!(settled = %value, "debounce settled");
                if output.send(value).is_err() {
                    break;
                }
            }
        }
    }
}
