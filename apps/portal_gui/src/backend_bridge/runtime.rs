//! Runtime bridge between the UI command queue and the portal controller.

use std::{sync::Arc, thread};

use client_core::{view::PortalViews, ActivitiesClient, ClientSettings, PortalController};
use crossbeam_channel::Receiver;
use tokio::time::{interval, MissedTickBehavior};

use crate::{backend_bridge::commands::BackendCommand, ui::page::PortalPage};

pub fn launch(settings: ClientSettings, page: Arc<PortalPage>, cmd_rx: Receiver<BackendCommand>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                page.set_status(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = match ActivitiesClient::from_settings(&settings) {
            Ok(client) => client,
            Err(err) => {
                page.set_status(format!("invalid server url: {err}"));
                tracing::error!(server_url = %settings.server_url, "failed to build activities client: {err}");
                return;
            }
        };
        let controller = Arc::new(PortalController::new(
            Arc::new(client),
            PortalViews::from_page(&page),
            settings.feedback_hide_after(),
        ));

        runtime.block_on(async move {
            tracing::info!(server_url = %settings.server_url, "backend worker started");
            {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    controller.start().await;
                });
            }

            if let Some(period) = settings.refresh_interval() {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    let mut ticker = interval(period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    // The first tick fires immediately and start() already fetched.
                    ticker.tick().await;
                    loop {
                        ticker.tick().await;
                        controller.refresh_directory().await;
                    }
                });
            }

            while let Ok(cmd) = cmd_rx.recv() {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move {
                    match cmd {
                        BackendCommand::Refresh => {
                            controller.refresh_directory().await;
                        }
                        BackendCommand::Submit { email, activity } => {
                            controller.submit_enrollment(&email, &activity).await;
                        }
                        BackendCommand::Withdraw { email, activity } => {
                            controller.withdraw_enrollment(&email, &activity).await;
                        }
                    }
                });
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}
