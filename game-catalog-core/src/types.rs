//! Data model types for the game catalog.
//!
//! The catalog is a flat JSON array of [`Record`]s consumed by the web
//! front-end. Field order in the serialized form follows the struct order.

use serde::{Deserialize, Serialize};

/// Columns every import CSV must provide (after trimming and lower-casing
/// the header).
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "category",
    "thumbnail",
    "url",
    "description",
    "instructions",
];

// ── Record ──────────────────────────────────────────────────────────────────

/// One game entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Game page URL loaded by the front-end.
    pub url: String,
    pub description: String,
    pub instructions: String,
    /// How the front-end launches the game.
    #[serde(rename = "use")]
    pub launch: LaunchMode,
}

/// How the front-end opens a game's `url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Embedded in the site's game frame. Every imported record uses this.
    #[default]
    Iframe,
    /// Navigate the whole page to the URL.
    Redirect,
    /// Hand the URL to the bundled emulator page.
    Emulator,
}

impl LaunchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LaunchMode::Iframe => "iframe",
            LaunchMode::Redirect => "redirect",
            LaunchMode::Emulator => "emulator",
        }
    }
}

impl std::fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
