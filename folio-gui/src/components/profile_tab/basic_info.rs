use folio_lib::editor::{Editor, Viewer, format_date};
use iced::{
    Element,
    widget::{button, column, row, space, text},
};

use crate::components::profile_tab::Message;

pub const NO_LINKED_ACCOUNT: &str = "No Linked MusicBrainz Account";

/// How the linked MusicBrainz account gets shown. First match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountDisplay<'a> {
    /// Cached account name is known; rendered as a profile link plus a
    /// "send email" link.
    Linked(&'a str),
    /// Only the raw MusicBrainz user id is known.
    Raw(i64),
    /// The viewer owns this profile and hasn't linked an account yet.
    LinkPrompt,
    NotLinked,
}

pub fn resolve_account<'a>(editor: &'a Editor, viewer: Option<&Viewer>) -> AccountDisplay<'a> {
    if let Some(name) = editor.cached_metabrainz_name.as_deref() {
        return AccountDisplay::Linked(name);
    }

    if let Some(id) = editor.metabrainz_user_id {
        return AccountDisplay::Raw(id);
    }

    match viewer {
        Some(viewer) if viewer.id == editor.id => AccountDisplay::LinkPrompt,
        _ => AccountDisplay::NotLinked,
    }
}

pub fn view<'a>(editor: &'a Editor, viewer: Option<&'a Viewer>) -> Element<'a, Message> {
    let mut header = row![text("Basic Info").size(24)];
    if viewer.is_some_and(|viewer| viewer.id == editor.id) {
        header = header.push(space::horizontal());
        header = header.push(button(text("Edit Profile")).on_press(Message::EditPressed));
    }

    column![
        header,
        field("MusicBrainz Account", account_view(editor, viewer)),
        field("Display Name", text(&editor.name).into()),
        field(
            "Area",
            text(editor.area.as_ref().map_or("?", |area| area.name.as_str())).into(),
        ),
        field(
            "Gender",
            text(
                editor
                    .gender
                    .as_ref()
                    .map_or("?", |gender| gender.name.as_str())
            )
            .into(),
        ),
        field("Type", text(&editor.editor_type.label).into()),
        // The site shows a literal zero here; reputation isn't computed yet
        field("Reputation", text("0").into()),
        field("Joined", text(format_date(&editor.created_at)).into()),
        field("Last login", text(format_date(&editor.active_at)).into()),
        field(
            "Bio",
            text(if editor.bio.is_empty() {
                "-"
            } else {
                editor.bio.as_str()
            })
            .into(),
        ),
    ]
    .spacing(8)
    .into()
}

fn account_view<'a>(editor: &'a Editor, viewer: Option<&'a Viewer>) -> Element<'a, Message> {
    match resolve_account(editor, viewer) {
        AccountDisplay::Linked(name) => row![
            link(name, format!("https://musicbrainz.org/user/{name}")),
            link(
                "send email",
                format!("https://musicbrainz.org/user/{name}/contact"),
            ),
        ]
        .spacing(8)
        .into(),
        AccountDisplay::Raw(id) => text(id.to_string()).into(),
        AccountDisplay::LinkPrompt => link("Link My MusicBrainz Account", "/auth".to_owned()),
        AccountDisplay::NotLinked => text(NO_LINKED_ACCOUNT).into(),
    }
}

fn link<'a>(label: &'a str, url: String) -> Element<'a, Message> {
    button(text(label))
        .style(button::text)
        .on_press(Message::OpenUrl(url))
        .into()
}

fn field<'a>(label: &'a str, value: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).width(180), value].spacing(12).into()
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use folio_lib::editor::EditorType;

    use super::*;

    fn editor() -> Editor {
        Editor {
            id: 17,
            name: "Alice".to_owned(),
            bio: String::new(),
            area: None,
            gender: None,
            title_unlock_id: None,
            editor_type: EditorType {
                id: 1,
                label: "Editor".to_owned(),
            },
            total_revisions: 0,
            revisions_applied: 0,
            revisions_reverted: 0,
            created_at: chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            active_at: chrono::Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
            metabrainz_user_id: None,
            cached_metabrainz_name: None,
            activity_data: Default::default(),
        }
    }

    #[test]
    fn test_cached_name_wins() {
        let mut editor = editor();
        editor.cached_metabrainz_name = Some("alice99".to_owned());
        editor.metabrainz_user_id = Some(42);

        assert_eq!(
            resolve_account(&editor, None),
            AccountDisplay::Linked("alice99")
        );
    }

    #[test]
    fn test_raw_id_when_no_cached_name() {
        let mut editor = editor();
        editor.metabrainz_user_id = Some(42);

        assert_eq!(resolve_account(&editor, None), AccountDisplay::Raw(42));
    }

    #[test]
    fn test_owner_gets_link_prompt() {
        let editor = editor();

        assert_eq!(
            resolve_account(&editor, Some(&Viewer { id: 17 })),
            AccountDisplay::LinkPrompt
        );
    }

    #[test]
    fn test_other_viewers_see_not_linked() {
        let editor = editor();

        assert_eq!(
            resolve_account(&editor, Some(&Viewer { id: 99 })),
            AccountDisplay::NotLinked
        );
        assert_eq!(resolve_account(&editor, None), AccountDisplay::NotLinked);
    }
}
