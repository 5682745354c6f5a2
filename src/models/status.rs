//! SubmissionStatus model driving the form's feedback banner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner shown after the relay accepted the message.
pub const SUCCESS_BANNER: &str = "Message sent successfully! I will get back to you soon.";

/// Banner shown after any non-validation failure.
pub const ERROR_BANNER: &str = "Something went wrong. Please try again or email me directly.";

/// State of the most recent submit attempt.
///
/// `Idle -> Submitting -> Success | Error -> Idle`. The return to `Idle` is
/// driven by the status reset timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Message for the feedback banner, if one should be shown.
    ///
    /// Configuration and transport failures share the same text.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_BANNER),
            Self::Error => Some(ERROR_BANNER),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Whether the attempt has settled and awaits the reset timer.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{}", s)
    }
}
