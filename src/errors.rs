use thiserror::Error;

use crate::sports::League;

/// Environment variable holding the gateway credential.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Detailed error type for gateway and configuration failures.
///
/// Parse/shape mismatches in model output are deliberately NOT errors:
/// the splitter and aligner absorb ragged output silently.
#[derive(Debug, Error, Clone)]
pub enum BetError {
    /// The gateway credential is not set in the process environment
    #[error("Missing credential: the {0} environment variable is not set")]
    MissingCredential(&'static str),

    /// The gateway rejected the credential
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The gateway refused the request due to quota or rate limits
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The request did not complete within the client timeout
    #[error("Request timed out after {0}s")]
    RequestTimeout(u64),

    /// Transport-level failure before a status code was received
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway returned an error status
    #[error("Model service returned {0}: {1}")]
    ServerError(u16, String),

    /// The reply parsed but carried no output text
    #[error("Empty or invalid response received: {0}")]
    EmptyResponse(String),

    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
}

impl BetError {
    /// Get detailed diagnostic information about the error
    pub fn diagnostics(&self) -> String {
        match self {
            BetError::MissingCredential(var) => {
                format!("Configuration Error\nVariable: {}\nSuggestion: export {}=<your key> and restart", var, var)
            }
            BetError::AuthenticationFailed(reason) => {
                format!("Authentication Failed\nReason: {}\nSuggestion: Verify the {} value is a valid key", reason, CREDENTIAL_VAR)
            }
            BetError::RateLimited(reason) => {
                format!("Rate Limited\nReason: {}\nSuggestion: Wait a minute before fetching again", reason)
            }
            BetError::RequestTimeout(secs) => {
                format!("Request Timeout\nTimeout: {} seconds\nSuggestion: The model service is slow right now, try again", secs)
            }
            BetError::Network(reason) => {
                format!("Network Error\nReason: {}\nSuggestion: Check your internet connection", reason)
            }
            BetError::ServerError(status, message) => {
                format!("Server Error\nStatus: {}\nMessage: {}\nSuggestion: Try again later", status, message)
            }
            BetError::EmptyResponse(reason) => {
                format!("Empty Response\nReason: {}\nSuggestion: Fetch again, the model returned nothing usable", reason)
            }
            BetError::Generic(message) => {
                format!("Error\nMessage: {}\nSuggestion: Try again", message)
            }
        }
    }

    /// True for failures that should surface as a dismissible popup while
    /// leaving session state untouched. Only the missing credential is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BetError::MissingCredential(_))
    }
}

/// Pipeline stages reported while a fetch is in flight
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStage {
    Connecting,
    FindingGames(League),
    PickingWinners(League),
    WritingReasoning(League),
    Complete,
}

impl FetchStage {
    pub fn display_name(&self) -> String {
        match self {
            FetchStage::Connecting => "Contacting model service".to_string(),
            FetchStage::FindingGames(league) => {
                format!("Scouting upcoming {} games", league.display_name())
            }
            FetchStage::PickingWinners(league) => {
                format!("Picking {} winners", league.display_name())
            }
            FetchStage::WritingReasoning(league) => {
                format!("Writing {} reasoning", league.display_name())
            }
            FetchStage::Complete => "Complete".to_string(),
        }
    }
}
