// SPDX-License-Identifier: MPL-2.0
//! Full-screen story viewer.
//!
//! The component owns a [`StoryPlaybackController`] and binds it to iced:
//! a periodic tick subscription while playing, native pointer and keyboard
//! events while open, and a view that renders progress segments, header
//! controls, the current item, author navigation and the reply bar.
//!
//! The story surface is centred in the window and at most
//! [`VIEWER_MAX_WIDTH`](sizing::VIEWER_MAX_WIDTH) wide; tap zones are
//! thirds of that surface.

pub mod input;
pub mod progress;

use crate::catalog::StoryCatalog;
use crate::config::Config;
use crate::domain::story::{
    AuthorId, ItemId, PlaybackState, StoryItem, TextPosition, TickInterval,
};
use crate::i18n::I18n;
use crate::story::{Effect, PointerTracker, StoryPlaybackController};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{glyphs, styles};
use iced::widget::{button, text_input, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, event, time, Color, Element, Length, Point, Subscription};
pub use input::Input;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Tick,
    RawEvent(Input),
    Close,
    TogglePause,
    ToggleMute,
    PreviousAuthor,
    NextAuthor,
    ToggleLike,
    ReplyChanged(String),
    SendReply,
}

/// Viewer component state.
#[derive(Debug)]
pub struct State {
    controller: StoryPlaybackController<Vec<Effect>>,
    tick_interval: TickInterval,
    pointer: PointerTracker,
    cursor_position: Option<Point>,
    window_width: f32,
    reply_text: String,
    liked: HashSet<ItemId>,
}

impl State {
    /// Opens the viewer on `focus` (or the first eligible author) in a window
    /// `window_width` pixels wide.
    ///
    /// Returns the effects of opening, including the first `ItemViewed`.
    pub fn open(
        catalog: &StoryCatalog,
        focus: Option<AuthorId>,
        config: &Config,
        window_width: f32,
    ) -> (Self, Vec<Effect>) {
        let controller = StoryPlaybackController::open(
            &catalog.authors,
            &catalog.eligibility(focus),
            config.playback_options(),
            config.gesture_config(),
            Vec::new(),
        );
        let mut state = Self {
            controller,
            tick_interval: config.tick_interval(),
            pointer: PointerTracker::default(),
            cursor_position: None,
            window_width,
            reply_text: String::new(),
            liked: HashSet::new(),
        };
        let effects = state.settle();
        (state, effects)
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.controller.playback()
    }

    #[must_use]
    pub fn controller(&self) -> &StoryPlaybackController<Vec<Effect>> {
        &self.controller
    }

    #[must_use]
    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }

    #[must_use]
    pub fn is_liked(&self, item: &ItemId) -> bool {
        self.liked.contains(item)
    }

    pub fn set_window_width(&mut self, width: f32) {
        self.window_width = width;
    }

    /// Horizontal offset and width of the story surface inside the window.
    #[must_use]
    pub fn surface(&self) -> (f32, f32) {
        let width = self.window_width.clamp(0.0, sizing::VIEWER_MAX_WIDTH);
        ((self.window_width - width).max(0.0) / 2.0, width)
    }

    /// Handles a message and returns the effects it produced.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Tick => {
                self.controller.tick(self.tick_interval.as_duration());
            }
            Message::RawEvent(input) => self.handle_input(input),
            Message::Close => {
                self.controller.close();
            }
            Message::TogglePause => {
                self.controller.toggle_pause();
            }
            Message::ToggleMute => {
                self.controller.toggle_mute();
            }
            Message::PreviousAuthor => {
                self.controller.go_previous_author();
            }
            Message::NextAuthor => {
                self.controller.go_next_author();
            }
            Message::ToggleLike => self.toggle_like(),
            Message::ReplyChanged(text) => self.reply_text = text,
            Message::SendReply => self.send_reply(),
        }
        self.settle()
    }

    fn handle_input(&mut self, input: Input) {
        let (offset, width) = self.surface();
        match input {
            Input::Key(event) => {
                self.controller.dispatch(event);
            }
            Input::PointerMoved(position) => self.cursor_position = Some(position),
            Input::PointerPressed(position) => {
                match position.or(self.cursor_position) {
                    Some(position) if (offset..=offset + width).contains(&position.x) => {
                        self.pointer.press(position.x - offset, position.y);
                    }
                    _ => self.pointer.cancel(),
                }
            }
            Input::PointerReleased(position) => match position.or(self.cursor_position) {
                Some(position) => {
                    if let Some(gesture) =
                        self.pointer.release(position.x - offset, position.y, width)
                    {
                        self.controller.gesture(gesture);
                    }
                }
                None => self.pointer.cancel(),
            },
            Input::PointerLost => {
                self.pointer.cancel();
                self.cursor_position = None;
            }
        }
    }

    fn toggle_like(&mut self) {
        let Some(item) = self.controller.state().current_item() else {
            return;
        };
        let id = item.id.clone();
        let liked = if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        };
        tracing::info!(item = %id, liked, "story like toggled");
    }

    fn send_reply(&mut self) {
        let reply = self.reply_text.trim();
        if reply.is_empty() {
            return;
        }
        let state = self.controller.state();
        tracing::info!(
            author = state.current_author().map(|author| author.id.as_str()),
            item = state.current_item().map(|item| item.id.as_str()),
            reply,
            "story reply sent"
        );
        self.reply_text.clear();
    }

    /// Drains queued effects, reporting items without media as failed loads.
    fn settle(&mut self) -> Vec<Effect> {
        let effects = std::mem::take(self.controller.observer_mut());
        let current_unloadable = self
            .controller
            .state()
            .current_item()
            .filter(|item| item.media_url.trim().is_empty())
            .map(|item| item.id.clone());

        if let Some(id) = current_unloadable {
            if effects.contains(&Effect::ItemViewed(id.clone())) {
                tracing::warn!(item = %id, "story item has no media, using fallback duration");
                self.controller.media_failed();
            }
        }
        effects
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = if self.playback().is_playing() {
            time::every(self.tick_interval.as_duration()).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        let input = if self.playback().is_open() {
            event::listen_with(|event, status, _window| {
                input::route(&event, status).map(Message::RawEvent)
            })
        } else {
            Subscription::none()
        };

        Subscription::batch([ticks, input])
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let state = self.controller.state();
        let (Some(author), Some(item), Some(cursor)) =
            (state.current_author(), state.current_item(), state.cursor())
        else {
            return Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::story_surface)
                .into();
        };

        let segments = progress::segment_fills(
            author.items.len(),
            cursor.item_index(),
            cursor.elapsed_fraction(),
        )
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, fill| {
            row.push(progress_segment(fill))
        });

        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(author.display_name.as_str()).size(typography::BODY))
            .push(
                Text::new(item.created_at_label.as_str())
                    .size(typography::CAPTION)
                    .color(Color {
                        a: opacity::SECONDARY_TEXT,
                        ..palette::WHITE
                    }),
            )
            .push(Space::new().width(Length::Fill))
            .push(control(
                if cursor.is_paused() {
                    glyphs::PLAY
                } else {
                    glyphs::PAUSE
                },
                Message::TogglePause,
            ));
        if item.media_kind.is_video() {
            header = header.push(control(
                if state.is_muted() {
                    glyphs::MUTED
                } else {
                    glyphs::UNMUTED
                },
                Message::ToggleMute,
            ));
        }
        header = header.push(control(glyphs::CLOSE, Message::Close));

        let mut author_nav = Row::new().align_y(alignment::Vertical::Center);
        if cursor.author_index() > 0 {
            author_nav = author_nav.push(author_button(
                glyphs::PREVIOUS_AUTHOR,
                Message::PreviousAuthor,
            ));
        }
        author_nav = author_nav.push(Space::new().width(Length::Fill));
        if cursor.author_index() + 1 < state.roster().len() {
            author_nav =
                author_nav.push(author_button(glyphs::NEXT_AUTHOR, Message::NextAuthor));
        }

        let placeholder = i18n.tr_with_args(
            "viewer-reply-placeholder",
            &[("username", author.display_name.as_str())],
        );
        let mut reply_bar = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                text_input(&placeholder, &self.reply_text)
                    .on_input(Message::ReplyChanged)
                    .on_submit(Message::SendReply)
                    .padding([spacing::XS, spacing::MD])
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .style(styles::text_input::composer),
            )
            .push(control(
                if self.liked.contains(&item.id) {
                    glyphs::LIKED
                } else {
                    glyphs::NOT_LIKED
                },
                Message::ToggleLike,
            ));
        if !self.reply_text.trim().is_empty() {
            reply_bar = reply_bar.push(
                button(Text::new(i18n.tr("viewer-send")).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::send)
                    .on_press(Message::SendReply),
            );
        }

        let chrome = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(segments)
            .push(header)
            .push(Space::new().height(Length::Fill))
            .push(author_nav)
            .push(Space::new().height(Length::Fill))
            .push(reply_bar);

        let content = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(media_layer(item, i18n))
            .push(chrome);

        let surface = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .max_width(sizing::VIEWER_MAX_WIDTH);

        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::story_surface)
            .into()
    }
}

fn progress_segment<'a>(fill: f32) -> Element<'a, Message> {
    const PORTIONS: u16 = 1000;
    let filled = (fill.clamp(0.0, 1.0) * f32::from(PORTIONS)).round() as u16;

    let mut bar = Row::new()
        .width(Length::Fill)
        .height(sizing::PROGRESS_SEGMENT);
    if filled > 0 {
        bar = bar.push(progress_part(true, filled));
    }
    if filled < PORTIONS {
        bar = bar.push(progress_part(false, PORTIONS - filled));
    }
    bar.into()
}

fn progress_part<'a>(filled: bool, portion: u16) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(styles::container::progress_part(filled))
        .into()
}

fn control<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button_overlay(opacity::CONTROL))
        .on_press(message)
        .into()
}

fn author_button<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button_overlay(opacity::CONTROL_STRONG))
        .on_press(message)
        .into()
}

/// Media placeholder with the item's overlay caption.
fn media_layer<'a>(item: &'a StoryItem, i18n: &I18n) -> Element<'a, Message> {
    let kind = if item.media_kind.is_video() {
        i18n.tr("viewer-media-video")
    } else {
        i18n.tr("viewer-media-image")
    };
    let media = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(kind).size(typography::CAPTION).color(palette::GRAY_400))
            .push(
                Text::new(item.media_url.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::media_frame);

    let Some(overlay) = item.overlay_text.as_deref() else {
        return media.into();
    };

    let caption = Container::new(
        Text::new(overlay)
            .size(typography::OVERLAY)
            .color(styles::container::overlay_text_color(item.overlay_color)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([spacing::LG * 4.0, spacing::MD])
    .align_x(alignment::Horizontal::Center)
    .align_y(match item.text_position {
        TextPosition::Top => alignment::Vertical::Top,
        TextPosition::Center => alignment::Vertical::Center,
        TextPosition::Bottom => alignment::Vertical::Bottom,
    });

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(media)
        .push(caption)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::StoryAuthor;
    use crate::story::Event;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    fn catalog() -> StoryCatalog {
        StoryCatalog {
            viewer_id: Some(AuthorId::new("me")),
            following: vec![AuthorId::new("a"), AuthorId::new("b")],
            authors: vec![
                StoryAuthor::new("a", "jessica_m").with_items(vec![
                    StoryItem::image("a1", "https://cdn.example/a1.jpg", 5.0),
                    StoryItem::image("a2", "", 5.0),
                ]),
                StoryAuthor::new("b", "miked_official")
                    .with_items(vec![StoryItem::video("b1", "https://cdn.example/b1.mp4", 15.0)]),
            ],
        }
    }

    fn open_in(window_width: f32) -> (State, Vec<Effect>) {
        State::open(&catalog(), None, &Config::default(), window_width)
    }

    fn open() -> (State, Vec<Effect>) {
        open_in(sizing::VIEWER_MAX_WIDTH)
    }

    fn tap(state: &mut State, x: f32) -> Vec<Effect> {
        state.update(Message::RawEvent(Input::PointerPressed(Some(Point::new(x, 400.0)))));
        state.update(Message::RawEvent(Input::PointerReleased(Some(Point::new(x, 400.0)))))
    }

    fn current_id(state: &State) -> Option<&str> {
        state
            .controller()
            .state()
            .current_item()
            .map(|item| item.id.as_str())
    }

    #[test]
    fn open_reports_first_item_viewed() {
        let (state, effects) = open();
        assert_eq!(effects, vec![Effect::ItemViewed(ItemId::new("a1"))]);
        assert_eq!(state.playback(), PlaybackState::Playing);
    }

    #[test]
    fn ticks_advance_by_the_configured_interval() {
        let (mut state, _) = open();
        let mut effects = Vec::new();
        for _ in 0..50 {
            effects.extend(state.update(Message::Tick));
        }
        assert_eq!(effects, vec![Effect::ItemViewed(ItemId::new("a2"))]);
    }

    #[test]
    fn item_without_media_falls_back_to_short_duration() {
        let (mut state, _) = open();
        state.update(Message::RawEvent(Input::Key(Event::Next)));
        let cursor = state.controller().state().cursor().expect("viewer open");
        assert_eq!(cursor.duration(), Duration::from_secs(1));
    }

    #[test]
    fn right_tap_release_goes_next() {
        let (mut state, _) = open();
        state.update(Message::RawEvent(Input::PointerPressed(Some(Point::new(350.0, 400.0)))));
        let effects =
            state.update(Message::RawEvent(Input::PointerReleased(Some(Point::new(352.0, 401.0)))));
        assert_eq!(effects, vec![Effect::ItemViewed(ItemId::new("a2"))]);
    }

    #[test]
    fn mouse_release_uses_last_cursor_position() {
        let (mut state, _) = open();
        state.update(Message::RawEvent(Input::PointerMoved(Point::new(195.0, 300.0))));
        state.update(Message::RawEvent(Input::PointerPressed(None)));
        state.update(Message::RawEvent(Input::PointerReleased(None)));
        assert_eq!(state.playback(), PlaybackState::Paused);
    }

    #[test]
    fn author_buttons_and_close() {
        let (mut state, _) = open();
        state.update(Message::NextAuthor);
        assert_eq!(current_id(&state), Some("b1"));
        state.update(Message::PreviousAuthor);
        assert_eq!(current_id(&state), Some("a1"));

        let effects = state.update(Message::Close);
        assert_eq!(effects, vec![Effect::RequestClose]);
        assert!(state.playback().is_closed());
    }

    #[test]
    fn surface_is_capped_and_centred_in_wide_windows() {
        let (state, _) = open_in(1200.0);
        let (offset, width) = state.surface();
        assert_abs_diff_eq!(width, sizing::VIEWER_MAX_WIDTH);
        assert_abs_diff_eq!(offset, 405.0);

        let (narrow, _) = open_in(320.0);
        assert_eq!(narrow.surface(), (0.0, 320.0));
    }

    #[test]
    fn tap_zones_are_thirds_of_the_visible_surface() {
        let (mut state, _) = open_in(1200.0);
        // Right edge of the centred 390 px surface.
        tap(&mut state, 405.0 + 380.0);
        assert_eq!(current_id(&state), Some("a2"));
        assert_eq!(state.playback(), PlaybackState::Playing);

        // Left edge of the surface.
        tap(&mut state, 405.0 + 10.0);
        assert_eq!(current_id(&state), Some("a1"));
    }

    #[test]
    fn taps_outside_the_surface_are_ignored() {
        let (mut state, _) = open_in(1200.0);
        let effects = tap(&mut state, 1100.0);
        assert!(effects.is_empty());
        assert_eq!(current_id(&state), Some("a1"));
        assert_eq!(state.playback(), PlaybackState::Playing);
    }

    #[test]
    fn window_resize_moves_the_surface() {
        let (mut state, _) = open();
        state.set_window_width(1200.0);
        tap(&mut state, 380.0);
        assert_eq!(current_id(&state), Some("a1"));
        tap(&mut state, 405.0 + 380.0);
        assert_eq!(current_id(&state), Some("a2"));
    }

    #[test]
    fn typing_in_the_composer_leaves_playback_alone() {
        let (mut state, _) = open();
        let effects = state.update(Message::ReplyChanged(" ".to_string()));
        assert!(effects.is_empty());
        assert_eq!(state.playback(), PlaybackState::Playing);
        assert_eq!(state.reply_text(), " ");
    }

    #[test]
    fn blank_reply_is_not_sent() {
        let (mut state, _) = open();
        state.update(Message::ReplyChanged("   ".to_string()));
        state.update(Message::SendReply);
        assert_eq!(state.reply_text(), "   ");
    }

    #[test]
    fn sending_a_reply_clears_the_composer() {
        let (mut state, _) = open();
        state.update(Message::ReplyChanged("love this!".to_string()));
        let effects = state.update(Message::SendReply);
        assert!(effects.is_empty());
        assert_eq!(state.reply_text(), "");
        assert_eq!(current_id(&state), Some("a1"));
    }

    #[test]
    fn like_toggles_per_item() {
        let (mut state, _) = open();
        state.update(Message::ToggleLike);
        assert!(state.is_liked(&ItemId::new("a1")));

        state.update(Message::RawEvent(Input::Key(Event::Next)));
        assert!(!state.is_liked(&ItemId::new("a2")));

        state.update(Message::RawEvent(Input::Key(Event::Previous)));
        state.update(Message::ToggleLike);
        assert!(!state.is_liked(&ItemId::new("a1")));
    }
}
