use thiserror::Error;

/// Errors that can occur while driving a session or rendering a document.
///
/// Amount calculation and asset loading never fail; none of these variants
/// are raised for user input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// A session action was invoked in a mode that does not offer it.
    #[error("invalid transition: {action} is not available while {mode}")]
    InvalidTransition {
        action: &'static str,
        mode: &'static str,
    },

    /// An output format could not be produced.
    #[error("render error: {0}")]
    Render(String),
}
