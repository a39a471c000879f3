//! Registration form checks: username availability hints and the exact
//! password length gate.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

/// Exact password length the registration form accepts.
pub const REQUIRED_PASSWORD_LENGTH: usize = 8;

/// Styling applied to an inline hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintTone {
    Ok,
    Error,
}

impl HintTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Ok => "hint-ok",
            Self::Error => "hint-error",
        }
    }

    /// Class that must be removed when this tone is shown.
    #[must_use]
    pub fn opposite_class(self) -> &'static str {
        match self {
            Self::Ok => Self::Error.class(),
            Self::Error => Self::Ok.class(),
        }
    }
}

/// Password length counted in characters, not bytes.
#[must_use]
pub fn password_is_valid(password: &str, required: usize) -> bool {
    password.chars().count() == required
}

#[must_use]
pub fn password_tone(password: &str, required: usize) -> HintTone {
    if password_is_valid(password, required) { HintTone::Ok } else { HintTone::Error }
}

#[must_use]
pub fn password_error_message(required: usize) -> String {
    format!("Password must be exactly {required} characters.")
}

/// What the username hint should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsernameHint {
    Cleared,
    Taken,
    Available,
}

impl UsernameHint {
    #[must_use]
    pub fn from_exists(exists: bool) -> Self {
        if exists { Self::Taken } else { Self::Available }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Cleared => "",
            Self::Taken => "Username is already taken.",
            Self::Available => "Username is available.",
        }
    }

    #[must_use]
    pub fn tone(self) -> Option<HintTone> {
        match self {
            Self::Cleared => None,
            Self::Taken => Some(HintTone::Error),
            Self::Available => Some(HintTone::Ok),
        }
    }
}

/// Trimmed username worth looking up, or `None` for blank input.
#[must_use]
pub fn username_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
