//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL: &str = "UI command queue is full; please retry";
pub const BACKEND_DISCONNECTED: &str =
    "Backend command processor disconnected (possible startup/runtime failure); restart the portal";

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = Some(QUEUE_FULL.to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some(BACKEND_DISCONNECTED.to_string());
        }
    }
}
