//! Theme registry.
//!
//! A fixed list of named palettes. Each palette binds the same ten CSS custom
//! properties; the UI installs the active one as a `:root` rule.

use std::fmt::Write;

/// CSS custom properties every theme binds, in declaration order.
pub const THEME_VARIABLES: [&str; 10] = [
    "--color-primary",
    "--color-secondary",
    "--color-background",
    "--color-text",
    "--color-card-bg",
    "--color-card-border",
    "--color-input-bg",
    "--color-input-border",
    "--color-input-text",
    "--color-heading",
];

/// Storage key under which the selected theme name is persisted.
pub const SELECTED_THEME_KEY: &str = "selectedTheme";

/// A named set of CSS variable bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

impl Theme {
    /// Value bound to a CSS variable, if the theme declares it.
    pub fn color(&self, variable: &str) -> Option<&'static str> {
        self.colors
            .iter()
            .find(|(name, _)| *name == variable)
            .map(|(_, value)| *value)
    }

    /// Swatch color shown next to the theme name in the selector.
    pub fn primary(&self) -> &'static str {
        self.color("--color-primary").unwrap_or("transparent")
    }

    /// Render the theme as a `:root { ... }` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.colors {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}

macro_rules! palette {
    ($primary:expr, $secondary:expr, $background:expr, $text:expr, $card_bg:expr,
     $card_border:expr, $input_bg:expr, $input_border:expr, $input_text:expr, $heading:expr) => {
        &[
            ("--color-primary", $primary),
            ("--color-secondary", $secondary),
            ("--color-background", $background),
            ("--color-text", $text),
            ("--color-card-bg", $card_bg),
            ("--color-card-border", $card_border),
            ("--color-input-bg", $input_bg),
            ("--color-input-border", $input_border),
            ("--color-input-text", $input_text),
            ("--color-heading", $heading),
        ]
    };
}

static THEMES: [Theme; 8] = [
    Theme {
        name: "Professional Blue",
        colors: palette!(
            "#3b82f6", "#60a5fa", "#f3f4f6", "#374151", "#ffffff",
            "#e5e7eb", "#f9fafb", "#d1d5db", "#111827", "#1f2937"
        ),
    },
    Theme {
        name: "Emerald Green",
        colors: palette!(
            "#10b981", "#34d399", "#ecfdf5", "#064e3b", "#ffffff",
            "#a7f3d0", "#d1fae5", "#6ee7b7", "#064e3b", "#065f46"
        ),
    },
    Theme {
        name: "Deep Violet",
        colors: palette!(
            "#8b5cf6", "#a78bfa", "#f5f3ff", "#4c1d95", "#ffffff",
            "#ddd6fe", "#ede9fe", "#c4b5fd", "#4c1d95", "#5b21b6"
        ),
    },
    Theme {
        name: "Monochrome Slate",
        colors: palette!(
            "#475569", "#64748b", "#1e293b", "#e2e8f0", "#334155",
            "#475569", "#475569", "#64748b", "#f1f5f9", "#f8fafc"
        ),
    },
    Theme {
        name: "Warm Orange",
        colors: palette!(
            "#f97316", "#fb923c", "#fff7ed", "#7c2d12", "#ffffff",
            "#fed7aa", "#ffedd5", "#fdba74", "#7c2d12", "#9a3412"
        ),
    },
    Theme {
        name: "Oceanic Teal",
        colors: palette!(
            "#0d9488", "#2dd4bf", "#f0fdfa", "#134e4a", "#ccfbf1",
            "#99f6e4", "#f0fdfa", "#5eead4", "#134e4a", "#115e59"
        ),
    },
    Theme {
        name: "Sunset Coral",
        colors: palette!(
            "#ff7f50", "#ff9b71", "#fff0e6", "#8B4513", "#ffffff",
            "#ffd4b2", "#ffe5d9", "#ffc0a1", "#8B4513", "#d2691e"
        ),
    },
    Theme {
        name: "Crimson Red",
        colors: palette!(
            "#dc2626", "#ef4444", "#fef2f2", "#991b1b", "#fee2e2",
            "#fecaca", "#fef2f2", "#fca5a5", "#991b1b", "#b91c1c"
        ),
    },
];

/// All registered themes, in display order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// The theme used when nothing (or something unknown) was persisted.
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Look up a theme by its display name.
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

/// Resolve a persisted name to a theme, falling back to the default.
pub fn resolve_theme(persisted: Option<&str>) -> &'static Theme {
    persisted.and_then(find_theme).unwrap_or_else(default_theme)
}

/// Open/closed state of the theme selector's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMenu {
    #[default]
    Closed,
    Open,
}

impl ThemeMenu {
    pub fn is_open(self) -> bool {
        matches!(self, ThemeMenu::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMenu::Closed => ThemeMenu::Open,
            ThemeMenu::Open => ThemeMenu::Closed,
        }
    }
}
