//! Transient notifications.
//!
//! Operations that the visitor should hear about return a [`Notice`]. The
//! storefront queues it in the session and shows it once on the next page.

use serde::{Deserialize, Serialize};

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Info,
    /// Rejections and validation failures.
    Destructive,
}

/// A short-lived status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: Tone::Info,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: Tone::Destructive,
        }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.tone == Tone::Destructive
    }
}
