use thiserror::Error;

use crate::models::TicketDebug;

/// Internal parse-level failure raised while interpreting an API response.
/// Always caught inside the handlers and re-wrapped as
/// [`SpamExpertsError::MissingAuthTicket`]; never surfaced to callers raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CannotParseResponse(pub(crate) String);

#[derive(Error, Debug)]
pub enum SpamExpertsError {
    #[error("Request to SpamExperts failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{message}")]
    MissingAuthTicket {
        message: String,
        /// Full diagnostic context for the caller to log.
        debug: TicketDebug,
    },
}

pub type Result<T> = std::result::Result<T, SpamExpertsError>;
