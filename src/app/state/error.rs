use chrono::{DateTime, Local};

/// A settled failure, shown in the results region and the status line until
/// the next submission clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl ErrorState {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
        }
    }
}
