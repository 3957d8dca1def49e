/*
 * Error type for the control host. Native window creation failures are not
 * errors here: they surface as invalid handles, exactly as the native layer
 * reports them. `PlatformError` only covers lifecycle misuse detected at the
 * API boundary before any native call is made.
 */

use crate::host::HostState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The requested operation is not allowed in the host's current state.
    InvalidState {
        operation: &'static str,
        state: HostState,
    },
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState { operation, state } => {
                write!(f, "{operation} is not allowed while the host is {state:?}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

pub type Result<T> = std::result::Result<T, PlatformError>;
