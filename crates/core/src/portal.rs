//! Role portal sign-in stub.
//!
//! Submitting the form with the required fields filled in is all it takes
//! to "sign in". Nothing is verified and nothing is stored beyond the
//! visitor's own session; this gates a demo dashboard, not data.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::{self, FieldError};
use crate::notice::Notice;
use crate::types::Email;

/// Business role served by a portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalRole {
    Producer,
    Wholesaler,
    Retailer,
}

impl PortalRole {
    pub const ALL: [Self; 3] = [Self::Producer, Self::Wholesaler, Self::Retailer];

    /// URL path segment and session key suffix.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Wholesaler => "wholesaler",
            Self::Retailer => "retailer",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::Wholesaler => "Wholesaler",
            Self::Retailer => "Retailer",
        }
    }

    /// Label of the extra organisation field on the registration form.
    #[must_use]
    pub const fn organisation_label(&self) -> &'static str {
        match self {
            Self::Producer => "Company Name",
            Self::Wholesaler => "Business Name",
            Self::Retailer => "Store Name",
        }
    }
}

impl fmt::Display for PortalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PortalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown portal: {s}"))
    }
}

/// Which variant of the auth form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode, for the "Register" / "Log In" toggle link.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    #[must_use]
    pub const fn is_register(&self) -> bool {
        matches!(self, Self::Register)
    }
}

/// Portal login / registration form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortalAuthForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organisation: Option<String>,
}

impl PortalAuthForm {
    /// Check the required fields for `mode` and open a session.
    ///
    /// The password is required but never looked at again.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`]: registration fields first, then
    /// email and password, matching the form layout.
    pub fn sign_in(
        &self,
        role: PortalRole,
        mode: AuthMode,
        now: DateTime<Utc>,
    ) -> Result<PortalSession, FieldError> {
        let (display_name, organisation) = match mode {
            AuthMode::Register => (
                Some(forms::required("Full Name", self.name.as_deref().unwrap_or(""))?),
                Some(forms::required(
                    role.organisation_label(),
                    self.organisation.as_deref().unwrap_or(""),
                )?),
            ),
            AuthMode::Login => (None, None),
        };
        let email = forms::email("Email", &self.email)?;
        forms::required("Password", &self.password)?;

        Ok(PortalSession {
            role,
            email,
            display_name,
            organisation,
            registered: mode.is_register(),
            signed_in_at: now,
        })
    }
}

/// Signed-in context for one portal.
///
/// Stored per role in the visitor's session and handed to dashboard
/// handlers explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSession {
    pub role: PortalRole,
    pub email: Email,
    pub display_name: Option<String>,
    pub organisation: Option<String>,
    /// Signed in through the registration form.
    pub registered: bool,
    pub signed_in_at: DateTime<Utc>,
}

impl PortalSession {
    /// Name for the dashboard greeting.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.email.local_part())
    }

    #[must_use]
    pub fn welcome_notice(&self) -> Notice {
        let title = if self.registered {
            "Registration successful!"
        } else {
            "Welcome back!"
        };
        Notice::info(
            title,
            format!("You've been logged in to your {} account.", self.role.slug()),
        )
    }
}

/// Where a retailer is sourcing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    Producer,
    Wholesaler,
}

impl OrderSource {
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Wholesaler => "wholesaler",
        }
    }
}

impl FromStr for OrderSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "producer" => Ok(Self::Producer),
            "wholesaler" => Ok(Self::Wholesaler),
            other => Err(format!("unknown order source: {other}")),
        }
    }
}
