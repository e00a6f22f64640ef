use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// A 50..=900 colour ramp.
pub struct ColorScale([&'static str; 10]);

const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

impl ColorScale {
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        STEPS
            .iter()
            .position(|&s| s == step)
            .map(|index| self.0[index])
    }
}

pub const PRIMARY: ColorScale = ColorScale([
    "#E8F4FC", "#C5E3F7", "#9DD0F2", "#75BCEC", "#4DA9E7",
    "#1F6FB2", "#1A5E99", "#154D80", "#103C66", "#0B2B4D",
]);

pub const GREEN: ColorScale = ColorScale([
    "#E6F7EF", "#C2ECD9", "#99E0C2", "#70D4AB", "#4DC999",
    "#2BB673", "#249E63", "#1D8654", "#166E44", "#0F5635",
]);

pub const NAVY: ColorScale = ColorScale([
    "#E8EEF3", "#C5D4E1", "#9DB8CC", "#759CB7", "#5282A3",
    "#0F2A44", "#0D2439", "#0B1E2E", "#081823", "#061218",
]);

pub const GRAY: ColorScale = ColorScale([
    "#FFFFFF", "#F9FAFB", "#F4F7FA", "#E5E7EB", "#9CA3AF",
    "#6B7280", "#4B5563", "#374151", "#1F2937", "#0F2A44",
]);

pub const THEME_BG: &str = "#FFFFFF";
pub const THEME_TEXT: &str = "#0F2A44";
pub const THEME_ACCENT: &str = "#1F6FB2";
pub const THEME_ACCENT_HOVER: &str = "#2A85D0";
pub const THEME_SECONDARY: &str = "#F4F7FA";
pub const TEXT_SECONDARY: &str = "#6B7280";
pub const THEME_GREEN: &str = "#2BB673";
pub const GOLD: &str = "#D4A93C";

pub const SHADOW_SOFT: &str = "0 2px 10px rgba(15, 42, 68, 0.04)";
pub const SHADOW_MEDIUM: &str = "0 4px 15px rgba(15, 42, 68, 0.08)";

pub const FONT_FAMILY: &str = "Inter, sans-serif";

/// Base document styles and shared keyframes.
#[function_component(ThemeStyles)]
pub fn theme_styles() -> Html {
    let base = css!(
        r#"
        html, body {
            margin: 0;
            padding: 0;
            font-family: ${font};
            background: ${bg};
            color: ${text};
        }

        a {
            color: ${accent};
        }

        a:hover {
            color: ${accent_hover};
        }

        @keyframes spin {
            to { transform: rotate(360deg); }
        }
        "#,
        font = FONT_FAMILY,
        bg = THEME_BG,
        text = THEME_TEXT,
        accent = THEME_ACCENT,
        accent_hover = THEME_ACCENT_HOVER,
    );

    html! { <Global css={base} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_resolve_tailwind_steps() {
        assert_eq!(PRIMARY.shade(500), Some(THEME_ACCENT));
        assert_eq!(GREEN.shade(500), Some(THEME_GREEN));
        assert_eq!(NAVY.shade(500), Some(THEME_TEXT));
        assert_eq!(GRAY.shade(200), Some(THEME_SECONDARY));
        assert_eq!(GRAY.shade(500), Some(TEXT_SECONDARY));
    }

    #[test]
    fn unknown_steps_have_no_shade() {
        assert_eq!(PRIMARY.shade(550), None);
        assert_eq!(NAVY.shade(0), None);
    }
}
