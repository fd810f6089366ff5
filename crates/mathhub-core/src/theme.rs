//! Derived color tokens for the four visual themes.

use crate::settings::Theme;

/// The three gradient color tokens derived from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub start: &'static str,
    pub mid: &'static str,
    pub end: &'static str,
}

impl Theme {
    /// Returns the palette for this theme from the fixed 4-entry table.
    ///
    /// The lookup is total: every enum value has an entry, so the undefined
    /// out-of-domain case cannot occur.
    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Indigo => ThemePalette {
                start: "#6366f1",
                mid: "#a855f7",
                end: "#ec4899",
            },
            Theme::Emerald => ThemePalette {
                start: "#10b981",
                mid: "#0ea5e9",
                end: "#3b82f6",
            },
            Theme::Amber => ThemePalette {
                start: "#f59e0b",
                mid: "#f97316",
                end: "#ef4444",
            },
            Theme::Cyan => ThemePalette {
                start: "#06b6d4",
                mid: "#0891b2",
                end: "#4f46e5",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_table() {
        let indigo = Theme::Indigo.palette();
        assert_eq!(indigo.start, "#6366f1");
        assert_eq!(indigo.mid, "#a855f7");
        assert_eq!(indigo.end, "#ec4899");

        let cyan = Theme::Cyan.palette();
        assert_eq!(cyan.start, "#06b6d4");
        assert_eq!(cyan.mid, "#0891b2");
        assert_eq!(cyan.end, "#4f46e5");
    }

    #[test]
    fn test_switch_rederives_all_three_tokens() {
        let before = Theme::Emerald.palette();
        let after = Theme::Amber.palette();
        assert_ne!(before.start, after.start);
        assert_ne!(before.mid, after.mid);
        assert_ne!(before.end, after.end);
        assert_eq!(after.start, "#f59e0b");
        assert_eq!(after.mid, "#f97316");
        assert_eq!(after.end, "#ef4444");
    }
}
