//! The three font styles a form can use.

use serde::{Deserialize, Serialize};

use crate::EditorError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    #[serde(rename = "font-sans")]
    Sans,
    #[serde(rename = "font-serif")]
    Serif,
    #[serde(rename = "font-mono")]
    Mono,
}

/// Every option, in menu order.
pub const FONT_STYLES: [FontStyle; 3] = [FontStyle::Sans, FontStyle::Serif, FontStyle::Mono];

impl FontStyle {
    /// Human label shown under the sample glyphs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sans => "Default",
            Self::Serif => "Serif",
            Self::Mono => "Mono",
        }
    }

    /// Class identifier stored in the form style.
    pub fn class(self) -> &'static str {
        match self {
            Self::Sans => "font-sans",
            Self::Serif => "font-serif",
            Self::Mono => "font-mono",
        }
    }

    pub fn from_class(class: &str) -> Result<Self, EditorError> {
        FONT_STYLES
            .into_iter()
            .find(|f| f.class() == class)
            .ok_or_else(|| EditorError::UnknownFontStyle(class.to_string()))
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class())
    }
}
