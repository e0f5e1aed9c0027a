use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::icons;
use crate::ui::theme::{colors, styles};

/// Welcome page shown once per session before the conversation.
pub struct LandingScreen;

#[derive(Debug, Clone)]
pub enum LandingMessage {
    GetStarted,
    ToggleTheme,
}

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }

    fn navbar(&self, ctx: &AppContext, theme: &Theme) -> Element<'_, LandingMessage> {
        let toggle = button(icons::theme_icon(
            ctx.session.state().theme,
            colors::text_primary(theme),
        ))
        .on_press(LandingMessage::ToggleTheme)
        .padding(6)
        .style(move |t: &Theme, status| styles::button_icon(t, status));

        container(
            row![
                text("ChatApp").size(22).color(colors::text_primary(theme)),
                Space::with_width(Length::Fill),
                toggle
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([12, 16]))
        .style(move |t: &Theme| styles::panel_header(t))
        .into()
    }

    fn footer(&self, theme: &Theme) -> Element<'_, LandingMessage> {
        container(
            text("© 2025 ChatApp. All rights reserved.")
                .size(13)
                .color(colors::text_secondary(theme)),
        )
        .center_x(Length::Fill)
        .padding(16)
        .style(move |t: &Theme| styles::panel_header(t))
        .into()
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LandingScreen {
    type Message = LandingMessage;

    fn update(
        &mut self,
        message: LandingMessage,
        ctx: &mut AppContext,
    ) -> ScreenCommand {
        match message {
            LandingMessage::GetStarted => ScreenCommand::from_effects(ctx.session.start()),
            LandingMessage::ToggleTheme => {
                ctx.session.toggle_theme();
                ScreenCommand::None
            }
        }
    }

    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &Theme) -> Element<'a, LandingMessage> {
        let hero = column![
            text("Welcome to ChatApp")
                .size(40)
                .color(colors::text_primary(theme)),
            text("Connect and collaborate with your team in real-time")
                .size(20)
                .color(colors::text_secondary(theme)),
            Space::with_height(16),
            button(text("Get Started").size(18))
                .on_press(LandingMessage::GetStarted)
                .padding([12, 32])
                .style(button::primary),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .max_width(640);

        let body = container(hero)
            .center_x(Length::Fill)
            .padding(Padding::ZERO.top(96))
            .height(Length::Fill);

        container(column![self.navbar(ctx, theme), body, self.footer(theme)])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(colors::background_base(t))),
                ..Default::default()
            })
            .into()
    }
}
