// SPDX-License-Identifier: MPL-2.0
//! Stories tray shown while no viewer is open.

use crate::catalog::StoryCatalog;
use crate::domain::story::{AuthorId, StoryAuthor};
use crate::i18n::I18n;
use crate::story::ViewedStories;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the viewer on this author.
    Open(AuthorId),
}

/// One tray entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub author: &'a StoryAuthor,
    pub unseen: bool,
    pub is_own: bool,
}

/// Tray entries in display order.
#[must_use]
pub fn entries<'a>(catalog: &'a StoryCatalog, viewed: &ViewedStories) -> Vec<Entry<'a>> {
    catalog
        .tray_authors()
        .into_iter()
        .map(|author| Entry {
            author,
            unseen: !viewed.has_seen_all(author),
            is_own: catalog.viewer_id.as_ref() == Some(&author.id),
        })
        .collect()
}

/// Renders the tray; `notice` is an already localized message.
pub fn view<'a>(
    catalog: &'a StoryCatalog,
    viewed: &ViewedStories,
    notice: Option<String>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let own_label = i18n.tr("tray-own-story");
    let avatars = entries(catalog, viewed)
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, entry| {
            row.push(avatar(entry, &own_label))
        });

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(Text::new(i18n.tr("tray-heading")).size(typography::TITLE_MD))
        .push(avatars);

    if let Some(notice) = notice {
        content = content.push(
            Text::new(notice)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::story_surface)
        .into()
}

fn avatar<'a>(entry: Entry<'a>, own_label: &str) -> Element<'a, Message> {
    let name = if entry.is_own {
        own_label.to_string()
    } else {
        entry.author.display_name.clone()
    };
    let initial: String = entry.author.display_name.chars().take(1).collect();

    let ring = button(
        Container::new(Text::new(initial).size(typography::TITLE_MD))
            .width(sizing::TRAY_AVATAR)
            .height(sizing::TRAY_AVATAR)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .padding(spacing::XXS)
    .style(styles::button_tray_avatar(entry.unseen))
    .on_press(Message::Open(entry.author.id.clone()));

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(ring)
        .push(Text::new(name).size(typography::CAPTION))
        .into()
}
