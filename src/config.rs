use ratatui::style::{Color, Modifier, Style};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Suggestion engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestConfig {
    /// Ghost text appearance
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Label under which the overlay namespace is registered with the host
    #[serde(default = "default_namespace_label")]
    pub namespace_label: String,
}

fn default_namespace_label() -> String {
    "ghostline".to_string()
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightConfig::default(),
            namespace_label: default_namespace_label(),
        }
    }
}

/// Appearance of ghost text fragments
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HighlightConfig {
    /// Foreground color name (e.g. "darkgray", "blue", or "#7c7c7c")
    #[serde(default = "default_fg")]
    pub fg: String,

    /// Render ghost text in italics
    #[serde(default = "default_true")]
    pub italic: bool,

    /// Render ghost text dimmed
    #[serde(default = "default_true")]
    pub dim: bool,
}

fn default_fg() -> String {
    "darkgray".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            italic: true,
            dim: true,
        }
    }
}

impl HighlightConfig {
    /// Resolve to the style applied to every annotation fragment.
    /// An unparsable color name falls back to the terminal default.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Ok(color) = self.fg.parse::<Color>() {
            style = style.fg(color);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}
