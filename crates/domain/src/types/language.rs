//! Display language

use serde::{Deserialize, Serialize};

use crate::impl_wire_str_conversions;

/// Languages the built-in catalog ships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// The other language. There are exactly two.
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }

    /// Name of the language in itself, used on the toggle button.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
        }
    }
}

impl_wire_str_conversions!(Language {
    En => "en",
    Fr => "fr",
});
