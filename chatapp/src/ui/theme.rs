//! Theme management for the ChatApp UI
//!
//! Maps the session's light/dark preference onto iced themes and keeps the
//! widget styles used across screens in one place.

use chatapp_core::models::Presence;
use chatapp_core::session::ThemePreference;
use iced::widget::{button, container};
use iced::{Color, Theme};

pub fn iced_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Light => Theme::CatppuccinLatte,
        ThemePreference::Dark => Theme::CatppuccinMocha,
    }
}

/// Custom styles for various UI components
pub mod styles {
    use super::*;

    /// Style for the main panel divider
    pub fn divider(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.strong.color)),
            ..Default::default()
        }
    }

    /// Navbar, footer and sidebar header
    pub fn panel_header(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            ..Default::default()
        }
    }

    pub fn sidebar(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }

    /// Style for the reaction picker card
    pub fn card(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.base.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 16.0.into(),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        }
    }

    /// Dims the thread behind the narrow-layout sidebar
    pub fn modal_overlay(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let mut base_color = palette.background.base.color;
        base_color.a = 0.6;
        container::Style {
            background: Some(iced::Background::Color(base_color)),
            ..Default::default()
        }
    }

    pub fn message_incoming(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.background.weak.color)),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: iced::border::Radius {
                    top_left: 4.0,
                    top_right: 16.0,
                    bottom_right: 16.0,
                    bottom_left: 0.0,
                },
            },
            text_color: Some(palette.background.base.text),
            ..Default::default()
        }
    }

    pub fn message_outgoing(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.base.color)),
            border: iced::Border {
                radius: iced::border::Radius {
                    top_left: 16.0,
                    top_right: 4.0,
                    bottom_right: 0.0,
                    bottom_left: 16.0,
                },
                ..Default::default()
            },
            text_color: Some(palette.primary.base.text),
            ..Default::default()
        }
    }

    /// Pill under a message showing one emoji counter
    pub fn reaction_chip(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        let mut bg_color = palette.background.strong.color;
        bg_color.a = 0.9;
        container::Style {
            background: Some(iced::Background::Color(bg_color)),
            border: iced::Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            text_color: Some(palette.background.strong.text),
            ..Default::default()
        }
    }

    /// Round placeholder standing in for a contact picture
    pub fn avatar(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(palette.primary.weak.color)),
            border: iced::Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            text_color: Some(palette.primary.weak.text),
            ..Default::default()
        }
    }

    pub fn presence_dot(theme: &Theme, presence: Presence) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(iced::Background::Color(colors::presence(presence))),
            border: iced::Border {
                color: palette.background.weak.color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    /// Round "+" button next to each bubble
    pub fn button_reaction(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
            _ => palette.primary.base.color,
        };
        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color: palette.primary.base.text,
            border: iced::Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Style for icon buttons (transparent background)
    pub fn button_icon(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        match status {
            button::Status::Active => button::Style {
                background: Some(iced::Background::Color(Color::TRANSPARENT)),
                text_color: palette.background.base.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Hovered => button::Style {
                background: Some(iced::Background::Color(palette.background.weak.color)),
                text_color: palette.background.base.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Pressed => button::Style {
                background: Some(iced::Background::Color(palette.background.strong.color)),
                text_color: palette.background.base.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Disabled => button::Style {
                background: Some(iced::Background::Color(Color::TRANSPARENT)),
                text_color: palette.background.strong.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Emoji buttons inside the picker
    pub fn button_emoji(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                let mut color = palette.background.strong.color;
                color.a = 0.4;
                color
            }
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color: palette.background.base.text,
            border: iced::Border {
                radius: 20.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Helper functions to get colors from theme
pub mod colors {
    use super::*;

    pub fn text_primary(theme: &Theme) -> Color {
        theme.extended_palette().background.base.text
    }

    pub fn text_secondary(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.7;
        color
    }

    pub fn text_muted(theme: &Theme) -> Color {
        let mut color = theme.extended_palette().background.base.text;
        color.a = 0.5;
        color
    }

    pub fn background_base(theme: &Theme) -> Color {
        theme.extended_palette().background.base.color
    }

    pub fn background_weak(theme: &Theme) -> Color {
        theme.extended_palette().background.weak.color
    }

    pub fn presence(presence: Presence) -> Color {
        match presence {
            Presence::Online => Color::from_rgb8(0x22, 0xc5, 0x5e),
            Presence::Away => Color::from_rgb8(0xea, 0xb3, 0x08),
            Presence::Offline => Color::from_rgb8(0x6b, 0x72, 0x80),
        }
    }
}
