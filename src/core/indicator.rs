use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::NOT_AVAILABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Green,
    DarkBlue,
    Orange,
    Red,
}

impl StyleClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            StyleClass::Green => "green",
            StyleClass::DarkBlue => "dark-blue",
            StyleClass::Orange => "orange",
            StyleClass::Red => "red",
        }
    }
}

impl fmt::Display for StyleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Only an explicit `true` is outdated; any other scanner value is kept as text
// and styled like an up-to-date plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outdated {
    Yes,
    No,
    Unknown(String),
}

impl Outdated {
    pub fn unknown() -> Self {
        Outdated::Unknown(NOT_AVAILABLE.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Outdated::Yes => "true",
            Outdated::No => "false",
            Outdated::Unknown(s) => s.as_str(),
        }
    }

    pub fn style_class(&self) -> StyleClass {
        match self {
            Outdated::Yes => StyleClass::Red,
            Outdated::No | Outdated::Unknown(_) => StyleClass::Green,
        }
    }
}

impl fmt::Display for Outdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Outdated {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outdated::Yes => serializer.serialize_bool(true),
            Outdated::No => serializer.serialize_bool(false),
            Outdated::Unknown(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(i64),
    Unknown(String),
}

impl Confidence {
    pub fn unknown() -> Self {
        Confidence::Unknown(NOT_AVAILABLE.to_string())
    }

    pub fn score(&self) -> Option<i64> {
        match self {
            Confidence::Score(n) => Some(*n),
            Confidence::Unknown(_) => None,
        }
    }

    // 91..=99 is orange, not green.
    pub fn style_class(&self) -> StyleClass {
        match self.score() {
            Some(100) => StyleClass::Green,
            Some(50..=90) => StyleClass::DarkBlue,
            _ => StyleClass::Orange,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(n) => write!(f, "{n}"),
            Confidence::Unknown(s) => f.write_str(s),
        }
    }
}
