use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from appearance + high_contrast settings.
pub fn resolve_theme(appearance: Appearance, high_contrast: bool) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = match (is_dark, high_contrast) {
        (true, false) => dark_palette(),
        (false, false) => light_palette(),
        (true, true) => high_contrast_dark_palette(),
        (false, true) => high_contrast_light_palette(),
    };

    Theme::custom("EchoScribe", palette)
}

/// A softer text color for secondary labels.
pub fn tertiary_color(theme: &Theme) -> Color {
    let p = theme.palette();
    Color { a: 0.55, ..p.text }
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1d, 0x1f, 0x24),
        text: color!(0xd4, 0xd4, 0xd8),
        primary: color!(0x7a, 0x8c, 0xf0),
        success: color!(0x3d, 0xc8, 0x6b),
        warning: color!(0xf0, 0xc0, 0x2e),
        danger: color!(0xf0, 0x55, 0x4c),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf6, 0xf6, 0xf8),
        text: color!(0x20, 0x21, 0x24),
        primary: color!(0x45, 0x5c, 0xe0),
        success: color!(0x29, 0xa3, 0x53),
        warning: color!(0xd8, 0x8a, 0x0c),
        danger: color!(0xdb, 0x33, 0x2b),
    }
}

fn high_contrast_dark_palette() -> Palette {
    Palette {
        background: color!(0x00, 0x00, 0x00),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0x92, 0xa8, 0xff),
        success: color!(0x3d, 0xc8, 0x6b),
        warning: color!(0xf5, 0xd0, 0x26),
        danger: color!(0xff, 0x5c, 0x52),
    }
}

fn high_contrast_light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x1f, 0x3a, 0xc4),
        success: color!(0x1c, 0x7a, 0x3c),
        warning: color!(0x9e, 0x5f, 0x00),
        danger: color!(0xc2, 0x0d, 0x12),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
