//! Result of a registration entry point.
//!
//! Every entry point returns one of these instead of an error for
//! client-correctable rejections and notification failures. Store and
//! settings failures travel separately as `DomainError`.

use ra_shared::types::{HttpBody, MessageCode};

/// Diagnostic strings carried in the `data` field of non-success outcomes
pub mod messages {
    /// Account created but the first verification email was not delivered
    pub const ISSUE_ON_CREATE_FAILED: &str = "initiateRegistrationWithEmail is fail.";
    /// Resend suppressed because the last code is still active
    pub const RESEND_SUPPRESSED: &str =
        "The last verification letter is still valid, so cancel sending again.";
    /// Code rotated but the resend was not delivered
    pub const RESEND_FAILED: &str = "updateExpiredVerificationCodeAndResendEmail is fail.";
    /// Account is already past registration
    pub const IN_REVIEW: &str = "The letter has entered the review stage. Please wait patiently.";
    /// State not covered by the decision chain
    pub const ESCALATE: &str = "Please contact customer service";
    /// Progress code rotated but the email was not delivered
    pub const PROGRESS_SEND_FAILED: &str = "getRegistrationProgress is fail.";
}

/// Outcome of a registration entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The operation succeeded; `data` holds a payload when there is one
    Success { data: Option<String> },

    /// Refused because an active code already exists
    Forbidden { message: String },

    /// Client-correctable rejection
    ValidationFailed {
        code: MessageCode,
        message: Option<String>,
    },

    /// Notification failure or unexpected state
    Failed { message: Option<String> },
}

impl RegistrationOutcome {
    /// Success without payload
    pub fn success() -> Self {
        RegistrationOutcome::Success { data: None }
    }

    /// Success carrying a payload
    pub fn success_with(data: impl Into<String>) -> Self {
        RegistrationOutcome::Success {
            data: Some(data.into()),
        }
    }

    /// Forbidden with a message
    pub fn forbidden(message: impl Into<String>) -> Self {
        RegistrationOutcome::Forbidden {
            message: message.into(),
        }
    }

    /// Validation failure with a specific message code
    pub fn rejected(code: MessageCode) -> Self {
        RegistrationOutcome::ValidationFailed {
            code,
            message: None,
        }
    }

    /// Validation failure with a specific message code and message
    pub fn rejected_with(code: MessageCode, message: impl Into<String>) -> Self {
        RegistrationOutcome::ValidationFailed {
            code,
            message: Some(message.into()),
        }
    }

    /// Failure with a diagnostic message
    pub fn failed(message: impl Into<String>) -> Self {
        RegistrationOutcome::Failed {
            message: Some(message.into()),
        }
    }

    /// Failure without a message
    pub fn failed_silently() -> Self {
        RegistrationOutcome::Failed { message: None }
    }

    /// Build SUCCESS or FAILED from a notification result
    pub fn from_delivery(delivered: bool, failure_message: &str) -> Self {
        if delivered {
            Self::success()
        } else {
            Self::failed(failure_message)
        }
    }

    /// Message code placed in the response envelope
    pub fn message_code(&self) -> MessageCode {
        match self {
            RegistrationOutcome::Success { .. } => MessageCode::Success,
            RegistrationOutcome::Forbidden { .. } => MessageCode::Forbidden,
            RegistrationOutcome::ValidationFailed { code, .. } => *code,
            RegistrationOutcome::Failed { .. } => MessageCode::Failed,
        }
    }

    /// Payload placed in the response envelope
    pub fn data(&self) -> Option<&str> {
        match self {
            RegistrationOutcome::Success { data } => data.as_deref(),
            RegistrationOutcome::Forbidden { message } => Some(message),
            RegistrationOutcome::ValidationFailed { message, .. } => message.as_deref(),
            RegistrationOutcome::Failed { message } => message.as_deref(),
        }
    }

    /// Check if this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success { .. })
    }

    /// Convert into the `{code, data}` envelope
    pub fn into_body(self) -> HttpBody<String> {
        let code = self.message_code();
        let data = match self {
            RegistrationOutcome::Success { data } => data,
            RegistrationOutcome::Forbidden { message } => Some(message),
            RegistrationOutcome::ValidationFailed { message, .. } => message,
            RegistrationOutcome::Failed { message } => message,
        };
        HttpBody::build(code, data)
    }
}
