use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings,
    view::{
        ActivityListView, ActivitySelectView, Feedback, FeedbackKind, ListContent, MessageView,
        ParticipantsSection, NO_PARTICIPANTS_PLACEHOLDER, PortalViews, SelectOption, SignupFormView,
    },
    ActivitiesClient, PortalController, RefreshStatus,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides `server_url` from portal.toml / APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every activity with its schedule, availability and roster.
    List,
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

/// Renders the page handles as plain terminal output.
struct TerminalPage;

impl ActivityListView for TerminalPage {
    fn replace(&self, content: ListContent) {
        match content {
            ListContent::Loading => println!("Loading activities..."),
            ListContent::Failed(text) => eprintln!("{text}"),
            ListContent::Cards(cards) => {
                for card in cards {
                    println!("{}", card.name);
                    println!("  {}", card.description);
                    println!("  Schedule: {}", card.schedule);
                    println!("  Availability: {}", card.availability_text());
                    println!("  Participants:");
                    match card.participants {
                        ParticipantsSection::Roster(emails) => {
                            for email in emails {
                                println!("    - {email}");
                            }
                        }
                        ParticipantsSection::Empty => println!("    {NO_PARTICIPANTS_PLACEHOLDER}"),
                    }
                }
            }
        }
    }
}

impl ActivitySelectView for TerminalPage {
    fn replace_options(&self, _options: Vec<SelectOption>) {}
}

impl SignupFormView for TerminalPage {
    fn reset(&self) {}
}

impl MessageView for TerminalPage {
    fn show(&self, feedback: &Feedback) {
        match feedback.kind {
            FeedbackKind::Success => println!("{}", feedback.text),
            FeedbackKind::Error => eprintln!("error: {}", feedback.text),
        }
    }

    fn hide(&self) {}
}

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(from_env: Option<&str>) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn exit_code(accepted: bool) -> ExitCode {
    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings()
        .context("failed to load portal settings")?
        .with_server_url(cli.server_url);
    info!(server_url = %settings.server_url, "using activities server");
    let client = ActivitiesClient::from_settings(&settings)?;

    let page = Arc::new(TerminalPage);
    let controller = PortalController::new(
        Arc::new(client),
        PortalViews::from_page(&page),
        settings.feedback_hide_after(),
    );

    let code = match cli.command {
        Command::List => {
            let status = controller.refresh_directory().await;
            exit_code(matches!(status, RefreshStatus::Rendered { .. }))
        }
        Command::Signup { activity, email } => {
            let outcome = controller.submit_enrollment(&email, &activity).await;
            exit_code(outcome.is_accepted())
        }
        Command::Unregister { activity, email } => {
            let outcome = controller.withdraw_enrollment(&email, &activity).await;
            exit_code(outcome.is_accepted())
        }
    };
    Ok(code)
}
