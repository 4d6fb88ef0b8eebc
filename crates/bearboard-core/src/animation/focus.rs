//! Focus state of the login form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which input field currently has the user's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FocusState {
    /// The avatar follows the typed text.
    #[default]
    Email,
    /// The avatar covers its eyes.
    Password,
}

impl fmt::Display for FocusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusState::Email => write!(f, "EMAIL"),
            FocusState::Password => write!(f, "PASSWORD"),
        }
    }
}

impl FromStr for FocusState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EMAIL" => Ok(FocusState::Email),
            "PASSWORD" | "KEY" => Ok(FocusState::Password),
            other => Err(format!("unknown focus state: {}", other)),
        }
    }
}

/// Focus state paired with the reveal flag.
///
/// `reveal` only influences animation while `focus` is
/// [`FocusState::Password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldFocus {
    pub focus: FocusState,
    pub reveal: bool,
}

impl FieldFocus {
    pub const fn new(focus: FocusState, reveal: bool) -> Self {
        Self { focus, reveal }
    }

    pub const fn email() -> Self {
        Self::new(FocusState::Email, false)
    }

    pub const fn password(reveal: bool) -> Self {
        Self::new(FocusState::Password, reveal)
    }

    pub fn is_password(&self) -> bool {
        self.focus == FocusState::Password
    }
}

impl fmt::Display for FieldFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reveal {
            write!(f, "{}+reveal", self.focus)
        } else {
            write!(f, "{}", self.focus)
        }
    }
}

/// Parses `EMAIL`, `PASSWORD` or `PASSWORD+reveal` (case-insensitive).
impl FromStr for FieldFocus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('+') {
            Some((focus, flag)) if flag.eq_ignore_ascii_case("reveal") => {
                Ok(Self::new(focus.parse()?, true))
            }
            Some((_, flag)) => Err(format!("unknown focus flag: {}", flag)),
            None => Ok(Self::new(s.parse()?, false)),
        }
    }
}
