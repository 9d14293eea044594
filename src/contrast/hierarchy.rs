//! Text hierarchy levels and their contrast thresholds.

use serde::{Deserialize, Serialize};

/// Role of a piece of text, used to pick contrast thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextHierarchy {
    /// Page and hero titles
    TitlePrimary,
    /// Section headings
    TitleSecondary,
    /// Running text (default)
    #[default]
    Body,
    /// Captions, hints, de-emphasized text
    Muted,
    /// Any tag not listed above; uses the fallback thresholds
    #[serde(other)]
    Unrecognized,
}

impl TextHierarchy {
    /// The four recognized hierarchies, in palette-report order.
    pub const ALL: [TextHierarchy; 4] = [
        TextHierarchy::TitlePrimary,
        TextHierarchy::TitleSecondary,
        TextHierarchy::Body,
        TextHierarchy::Muted,
    ];

    /// Minimum contrast ratio text at this level must reach.
    pub fn min_contrast(&self) -> f64 {
        match self {
            TextHierarchy::TitlePrimary => 7.0,
            TextHierarchy::TitleSecondary => 7.0,
            TextHierarchy::Body => 4.5,
            TextHierarchy::Muted => 3.0,
            TextHierarchy::Unrecognized => 4.5,
        }
    }

    /// Contrast ratio the optimal-text search aims for.
    pub fn preferred_contrast(&self) -> f64 {
        match self {
            TextHierarchy::TitlePrimary => 15.0,
            TextHierarchy::TitleSecondary => 12.0,
            TextHierarchy::Body => 9.0,
            TextHierarchy::Muted => 6.0,
            TextHierarchy::Unrecognized => 7.0,
        }
    }

    /// Tag as used in palette data (`title-primary`, `body`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TextHierarchy::TitlePrimary => "title-primary",
            TextHierarchy::TitleSecondary => "title-secondary",
            TextHierarchy::Body => "body",
            TextHierarchy::Muted => "muted",
            TextHierarchy::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for TextHierarchy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextHierarchy {
    type Err = std::convert::Infallible;

    /// Unknown tags map to [`TextHierarchy::Unrecognized`] rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "title-primary" => TextHierarchy::TitlePrimary,
            "title-secondary" => TextHierarchy::TitleSecondary,
            "body" => TextHierarchy::Body,
            "muted" => TextHierarchy::Muted,
            other => {
                tracing::debug!("Unrecognized text hierarchy {:?}, using default thresholds", other);
                TextHierarchy::Unrecognized
            }
        })
    }
}

impl From<&str> for TextHierarchy {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(hierarchy) => hierarchy,
            Err(never) => match never {},
        }
    }
}
