use chatapp_core::models::{Contact, Message, MessageId};
use chatapp_core::placement::{PICKER_WIDTH, Point, TriggerRect};
use iced::widget::{
    Row, Space, Stack, button, column, container, mouse_area, row, scrollable, stack, text,
    text_input,
};
use iced::{Alignment, Element, Length, Padding, Theme};

use crate::ui::AppContext;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::icons::{self, ADD_ICON, CLOSE_ICON, MENU_ICON, SEND_ICON};
use crate::ui::theme::{colors, styles};

pub const EMOJI_PALETTE: [&str; 12] = [
    "👍", "❤️", "😄", "😲", "😢", "👎", "🎉", "🚀", "💡", "🤔", "🙌", "🔥",
];

/// Windows narrower than this show the sidebar as a toggled overlay.
pub const NARROW_BREAKPOINT: f32 = 768.0;

const SIDEBAR_WIDTH: f32 = 320.0;
const REACTION_BUTTON_SIZE: f32 = 32.0;
// The picker card is drawn above and slightly left of its anchor.
const PICKER_RISE: f32 = 50.0;
const PICKER_SHIFT_LEFT: f32 = 20.0;

#[derive(Clone, Debug)]
pub enum ConversationMessage {
    ComposeChanged(String),
    SendMessage,
    ToggleTheme,
    ToggleSidebar,
    OpenReactionPicker { id: MessageId, sent_by_user: bool },
    React(String),
    DismissReactionPicker,
    Noop,
}

/// Contact sidebar, message thread, compose box and reaction picker.
pub struct ConversationScreen;

impl ConversationScreen {
    pub fn new() -> Self {
        Self
    }

    /// The press position stands in for the button bounds, which iced does
    /// not report on click.
    pub fn trigger_from_cursor(cursor: Point) -> TriggerRect {
        TriggerRect::new(
            cursor.x - REACTION_BUTTON_SIZE / 2.0,
            cursor.y - REACTION_BUTTON_SIZE / 2.0,
        )
    }

    /// Where the card is drawn for a stored anchor, never off the top-left.
    pub fn picker_offset(anchor: Point) -> Point {
        Point {
            x: (anchor.x - PICKER_SHIFT_LEFT).max(0.0),
            y: (anchor.y - PICKER_RISE).max(0.0),
        }
    }

    fn build_sidebar<'a>(
        &'a self,
        ctx: &'a AppContext,
        theme: &Theme,
        overlay: bool,
    ) -> Element<'a, ConversationMessage> {
        let icon_color = colors::text_primary(theme);
        // The overlay variant closes itself; the docked one carries the theme toggle.
        let (header_icon, on_press) = if overlay {
            (
                icons::icon(CLOSE_ICON, 20.0, icon_color),
                ConversationMessage::ToggleSidebar,
            )
        } else {
            (
                icons::theme_icon(ctx.session.state().theme, icon_color),
                ConversationMessage::ToggleTheme,
            )
        };
        let header_button = button(header_icon)
            .on_press(on_press)
            .padding(6)
            .style(move |t: &Theme, status| styles::button_icon(t, status));

        let header = row![
            text("Contacts").size(20).color(colors::text_primary(theme)),
            Space::with_width(Length::Fill),
            header_button
        ]
        .align_y(Alignment::Center);

        let mut list = column![].spacing(6);
        for contact in ctx.session.contacts() {
            list = list.push(self.build_contact_row(contact, theme));
        }

        container(column![header, scrollable(list).height(Length::Fill)].spacing(16))
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(16)
            .style(move |t: &Theme| styles::sidebar(t))
            .into()
    }

    fn build_contact_row<'a>(
        &'a self,
        contact: &'a Contact,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let presence = contact.presence;
        let avatar = container(text(contact.initials()).size(16))
            .center_x(Length::Fixed(48.0))
            .center_y(Length::Fixed(48.0))
            .style(move |t: &Theme| styles::avatar(t));
        let dot = container(
            container(Space::new(12, 12)).style(move |t: &Theme| styles::presence_dot(t, presence)),
        )
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0))
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom);

        let details = column![
            text(&contact.name).size(15).color(colors::text_primary(theme)),
            text(contact.status_line())
                .size(12)
                .color(colors::text_secondary(theme)),
        ]
        .spacing(2);

        container(row![stack![avatar, dot], details].spacing(12).align_y(Alignment::Center))
            .padding(8)
            .width(Length::Fill)
            .into()
    }

    fn build_narrow_header<'a>(
        &'a self,
        ctx: &'a AppContext,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let icon_color = colors::text_primary(theme);
        container(
            row![
                button(icons::icon(MENU_ICON, 20.0, icon_color))
                    .on_press(ConversationMessage::ToggleSidebar)
                    .padding(6)
                    .style(move |t: &Theme, status| styles::button_icon(t, status)),
                Space::with_width(Length::Fill),
                button(icons::theme_icon(ctx.session.state().theme, icon_color))
                    .on_press(ConversationMessage::ToggleTheme)
                    .padding(6)
                    .style(move |t: &Theme, status| styles::button_icon(t, status)),
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([8, 12]))
        .style(move |t: &Theme| styles::panel_header(t))
        .into()
    }

    fn build_message<'a>(
        &'a self,
        ctx: &'a AppContext,
        message: &'a Message,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let mine = message.is_mine();
        let mut content = column![].spacing(4);
        if !mine {
            if let Some(sender) = message
                .sender
                .contact_id()
                .and_then(|id| ctx.session.contact(id))
            {
                content = content.push(
                    text(&sender.name)
                        .size(12)
                        .color(colors::text_secondary(theme)),
                );
            }
        }
        content = content.push(text(&message.text).size(15));
        if !message.reactions.is_empty() {
            let chips: Row<'a, ConversationMessage> = row(message.reactions.iter().map(|reaction| {
                container(text(reaction.label()).size(13))
                    .padding([2, 6])
                    .style(move |t: &Theme| styles::reaction_chip(t))
                    .into()
            }))
            .spacing(4);
            content = content.push(chips);
        }
        content = content.push(
            text(message.create_time.clock_label())
                .size(10)
                .color(colors::text_muted(theme)),
        );

        let bubble = container(content)
            .padding(12)
            .max_width(420)
            .style(move |t: &Theme| {
                if mine {
                    styles::message_outgoing(t)
                } else {
                    styles::message_incoming(t)
                }
            });

        let react = button(
            container(icons::icon(ADD_ICON, 16.0, theme.extended_palette().primary.base.text))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(REACTION_BUTTON_SIZE))
        .height(Length::Fixed(REACTION_BUTTON_SIZE))
        .padding(0)
        .on_press(ConversationMessage::OpenReactionPicker {
            id: message.id,
            sent_by_user: mine,
        })
        .style(move |t: &Theme, status| styles::button_reaction(t, status));

        // The reaction button sits on the inner side of the bubble.
        let line = if mine {
            row![Space::with_width(Length::Fill), react, bubble]
        } else {
            row![bubble, react, Space::with_width(Length::Fill)]
        };
        line.spacing(6).align_y(Alignment::End).into()
    }

    fn build_thread<'a>(
        &'a self,
        ctx: &'a AppContext,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let messages = ctx.session.messages();
        let body: Element<'a, ConversationMessage> = if messages.is_empty() {
            container(
                text("No messages yet. Say hello!")
                    .size(16)
                    .color(colors::text_secondary(theme)),
            )
            .center_x(Length::Fill)
            .padding(32)
            .into()
        } else {
            let mut col = column![].spacing(16);
            for message in messages {
                col = col.push(self.build_message(ctx, message, theme));
            }
            col.into()
        };

        container(
            scrollable(container(body).padding(16))
                .height(Length::Fill)
                .id(ctx.thread_id.clone()),
        )
        .height(Length::Fill)
        .style(move |t: &Theme| container::Style {
            background: Some(iced::Background::Color(colors::background_base(t))),
            ..Default::default()
        })
        .into()
    }

    fn build_footer<'a>(
        &'a self,
        ctx: &'a AppContext,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let compose = &ctx.session.state().compose;
        let can_send = !compose.trim().is_empty();

        let send_icon = icons::icon(SEND_ICON, 18.0, colors::text_primary(theme));
        let mut send_btn = button(row![send_icon, text("Send").size(15)].spacing(6))
            .padding([10, 18]);
        if can_send {
            send_btn = send_btn
                .on_press(ConversationMessage::SendMessage)
                .style(button::primary);
        } else {
            send_btn = send_btn.style(button::secondary);
        }

        let input = text_input("Type a message...", compose)
            .on_input(ConversationMessage::ComposeChanged)
            .on_submit(ConversationMessage::SendMessage)
            .padding(12)
            .size(15)
            .width(Length::Fill);

        let mut col = column![].spacing(6);
        if ctx.session.is_contact_typing() {
            if let Some(replier) = ctx.session.replier() {
                col = col.push(
                    text(format!("{} is typing…", replier.name))
                        .size(12)
                        .color(colors::text_muted(theme)),
                );
            }
        }
        col = col.push(row![input, send_btn].spacing(8).align_y(Alignment::Center));

        container(col)
            .width(Length::Fill)
            .padding(16)
            .style(move |t: &Theme| container::Style {
                background: Some(iced::Background::Color(colors::background_weak(t))),
                ..Default::default()
            })
            .into()
    }

    fn build_reaction_picker<'a>(&'a self, anchor: Point) -> Element<'a, ConversationMessage> {
        let emojis: Row<'a, ConversationMessage> = row(EMOJI_PALETTE.iter().map(|emoji| {
            button(text(*emoji).size(22))
                .on_press(ConversationMessage::React(emoji.to_string()))
                .padding(6)
                .style(move |t: &Theme, status| styles::button_emoji(t, status))
                .into()
        }))
        .spacing(4)
        .align_y(Alignment::Center);

        let strip = scrollable(emojis)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(2).scroller_width(2),
            ))
            .width(Length::Fixed(PICKER_WIDTH));

        // Swallow clicks on the card so only the backdrop dismisses.
        let card = mouse_area(
            container(strip)
                .padding([8, 12])
                .style(move |t: &Theme| styles::card(t)),
        )
        .on_press(ConversationMessage::Noop);

        let offset = Self::picker_offset(anchor);
        container(card)
            .padding(Padding::ZERO.top(offset.y).left(offset.x))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Default for ConversationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ConversationScreen {
    type Message = ConversationMessage;

    fn update(
        &mut self,
        message: ConversationMessage,
        ctx: &mut AppContext,
    ) -> ScreenCommand {
        match message {
            ConversationMessage::ComposeChanged(value) => {
                ctx.session.set_compose_text(value);
                ScreenCommand::None
            }
            ConversationMessage::SendMessage => ScreenCommand::from_effects(ctx.session.send_draft()),
            ConversationMessage::ToggleTheme => {
                ctx.session.toggle_theme();
                ScreenCommand::None
            }
            ConversationMessage::ToggleSidebar => {
                ctx.session.toggle_sidebar();
                ScreenCommand::None
            }
            ConversationMessage::OpenReactionPicker { id, sent_by_user } => {
                let trigger = Self::trigger_from_cursor(ctx.cursor);
                ctx.session
                    .select_message_for_reaction(id, trigger, ctx.viewport.width, sent_by_user);
                ScreenCommand::None
            }
            ConversationMessage::React(emoji) => {
                ctx.session.add_reaction(&emoji);
                ScreenCommand::None
            }
            ConversationMessage::DismissReactionPicker => {
                ctx.session.dismiss_reaction_picker();
                ScreenCommand::None
            }
            ConversationMessage::Noop => ScreenCommand::None,
        }
    }

    fn view<'a>(
        &'a self,
        ctx: &'a AppContext,
        theme: &Theme,
    ) -> Element<'a, ConversationMessage> {
        let state = ctx.session.state();
        let narrow = ctx.viewport.width < NARROW_BREAKPOINT;

        let chat = column![self.build_thread(ctx, theme), self.build_footer(ctx, theme)]
            .width(Length::Fill)
            .height(Length::Fill);

        let main: Element<'a, ConversationMessage> = if narrow {
            column![self.build_narrow_header(ctx, theme), chat].into()
        } else {
            row![
                self.build_sidebar(ctx, theme, false),
                container(Space::with_width(1))
                    .height(Length::Fill)
                    .style(move |t: &Theme| styles::divider(t)),
                chat
            ]
            .into()
        };

        let mut layers: Vec<Element<'a, ConversationMessage>> = vec![main];

        if narrow && state.sidebar_visible {
            let dim = mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(move |t: &Theme| styles::modal_overlay(t)),
            )
            .on_press(ConversationMessage::ToggleSidebar);
            layers.push(row![self.build_sidebar(ctx, theme, true), dim].into());
        }

        if let Some(anchor) = state.popover_anchor() {
            let backdrop = mouse_area(Space::new(Length::Fill, Length::Fill))
                .on_press(ConversationMessage::DismissReactionPicker);
            layers.push(backdrop.into());
            layers.push(self.build_reaction_picker(anchor));
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
