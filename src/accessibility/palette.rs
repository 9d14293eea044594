//! Palette input model: color roles mapped to hex values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// `#RGB` or `#RRGGBB`, possibly malformed
    pub hex: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteColor {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: None,
        }
    }
}

/// Color roles (`primary`, `background`, ...) and their colors.
///
/// Roles iterate in sorted order so reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, PaletteColor>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a role.
    pub fn with_color(mut self, role: impl Into<String>, hex: impl Into<String>) -> Self {
        self.insert(role, PaletteColor::new(hex));
        self
    }

    pub fn insert(&mut self, role: impl Into<String>, color: PaletteColor) {
        self.colors.insert(role.into(), color);
    }

    pub fn get(&self, role: &str) -> Option<&PaletteColor> {
        self.colors.get(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteColor)> {
        self.colors.iter().map(|(role, color)| (role.as_str(), color))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<(String, PaletteColor)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, PaletteColor)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
