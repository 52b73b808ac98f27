use thiserror::Error;

/// Outbound mail failures. All map to 500.
#[derive(Error, Debug)]
pub enum MailError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid mail address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP relay rejected the message or could not be reached.
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
