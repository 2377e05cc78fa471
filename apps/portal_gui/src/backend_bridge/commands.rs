//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    Submit { email: String, activity: String },
    Withdraw { email: String, activity: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::Withdraw { .. } => "withdraw",
        }
    }
}
