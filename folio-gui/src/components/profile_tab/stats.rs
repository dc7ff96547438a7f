use folio_lib::editor::Editor;
use iced::{
    Element,
    widget::{column, row, text},
};

use crate::components::profile_tab::Message;

/// Revision counters, straight off the editor record.
pub fn view(editor: &Editor) -> Element<'_, Message> {
    column![
        text("Stats").size(24),
        counter("Total Revisions", editor.total_revisions),
        counter("Revisions Applied", editor.revisions_applied),
        counter("Revisions Reverted", editor.revisions_reverted),
    ]
    .spacing(8)
    .into()
}

fn counter(label: &str, count: u64) -> Element<'_, Message> {
    row![text(label).width(160), text(count.to_string())]
        .spacing(12)
        .into()
}
