use std::collections::HashMap;

use folio_lib::editor::{Achievement, AchievementSet, format_date};
use iced::{
    Alignment, Element, Length,
    widget::{column, container, image, row, text},
};

use crate::components::profile_tab::Message;

/// Width of the "no badges" filler panel on a 12-unit row, by number of
/// unlocked achievements. Three or more fill the row on their own.
pub fn filler_width(count: usize) -> Option<u16> {
    match count {
        0 => Some(12),
        1 => Some(8),
        2 => Some(4),
        _ => None,
    }
}

pub fn view<'a>(
    set: &'a AchievementSet,
    images: &HashMap<i64, image::Handle>,
) -> Element<'a, Message> {
    let mut gallery = row![].spacing(16);

    for unlock in &set.model {
        gallery = gallery.push(card(unlock, images.get(&unlock.id)));
    }

    if let Some(width) = filler_width(set.len()) {
        gallery = gallery.push(
            container(
                text("No badge to show, use the achievement menu to see available achievements")
                    .center(),
            )
            .padding(16)
            .width(Length::FillPortion(width))
            .style(container::bordered_box),
        );
    }

    column![text("Badges").size(24), gallery].spacing(8).into()
}

fn card<'a>(unlock: &'a Achievement, badge: Option<&image::Handle>) -> Element<'a, Message> {
    let mut content = column![].spacing(8).align_x(Alignment::Center);

    if let Some(handle) = badge {
        content = content.push(image(handle.clone()).height(100));
    }

    content = content
        .push(text(&unlock.achievement.name))
        .push(text(&unlock.achievement.description).size(12))
        .push(text(format!("Unlocked: {}", format_date(&unlock.unlocked_at))).size(12));

    container(content)
        .padding(16)
        .width(Length::FillPortion(4))
        .style(container::bordered_box)
        .into()
}
