use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_confirm: ColorSpec,
    pub footer_debug: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification kept as plain RGB components.
///
#[derive(Clone, Copy, Debug)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Look up a theme by its configured name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            secondary: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Yellow
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Cyan
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            }, // Dark blue
            highlight_bg: ColorSpec {
                r: 40,
                g: 52,
                b: 87,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            footer_search: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Yellow
            footer_confirm: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            footer_debug: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            footer_normal: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            secondary: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Green
            text: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            success: ColorSpec {
                r: 86,
                g: 148,
                b: 159,
            }, // Pine
            warning: ColorSpec {
                r: 234,
                g: 157,
                b: 52,
            }, // Gold
            error: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            }, // Rose
            info: ColorSpec {
                r: 40,
                g: 105,
                b: 131,
            }, // Foam
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            border_normal: ColorSpec {
                r: 223,
                g: 218,
                b: 217,
            }, // Highlight
            highlight_bg: ColorSpec {
                r: 244,
                g: 237,
                b: 232,
            }, // Overlay
            highlight_fg: ColorSpec {
                r: 87,
                g: 82,
                b: 121,
            }, // Iris
            footer_search: ColorSpec {
                r: 234,
                g: 157,
                b: 52,
            }, // Gold
            footer_confirm: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            }, // Rose
            footer_debug: ColorSpec {
                r: 144,
                g: 122,
                b: 169,
            }, // Iris
            footer_normal: ColorSpec {
                r: 86,
                g: 148,
                b: 159,
            }, // Pine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_known_themes() {
        assert_eq!(Theme::from_name("tokyo-night").unwrap().name, "tokyo-night");
        assert_eq!(
            Theme::from_name("rose-pine-dawn").unwrap().name,
            "rose-pine-dawn"
        );
        assert!(Theme::from_name("missing").is_none());
    }

    #[test]
    fn color_spec_converts_to_rgb() {
        let spec = ColorSpec { r: 1, g: 2, b: 3 };
        assert_eq!(spec.to_color(), Color::Rgb(1, 2, 3));
    }
}
