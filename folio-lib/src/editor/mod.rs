use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod achievement;
pub mod activity;
pub mod title;

pub use achievement::{Achievement, AchievementSet};
pub use activity::ActivitySeries;
pub use title::{Title, TitleOption, TitleUnlock};

/// A geographic area reference, resolved through the autocomplete search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
}

/// An entry of the gender reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorType {
    pub id: i64,
    pub label: String,
}

/// An editor's public profile as the server reports it.
///
/// Everything here is read-only on the client; edits go through a
/// [`ProfilePatch`](crate::api::ProfilePatch) built from a local draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub area: Option<Area>,
    pub gender: Option<Gender>,
    pub title_unlock_id: Option<i64>,
    #[serde(rename = "type")]
    pub editor_type: EditorType,
    pub total_revisions: u64,
    pub revisions_applied: u64,
    pub revisions_reverted: u64,
    pub created_at: DateTime<Utc>,
    pub active_at: DateTime<Utc>,
    pub metabrainz_user_id: Option<i64>,
    pub cached_metabrainz_name: Option<String>,
    #[serde(default)]
    pub activity_data: ActivitySeries,
}

/// The signed-in editor, used only to decide owner-only affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: i64,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Format a timestamp for display, e.g. "4 March 2021".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2021, 3, 4, 12, 30, 0).unwrap();

        assert_eq!(format_date(&date), "4 March 2021");
    }

    #[test]
    fn test_editor_from_wire() {
        let editor: Editor = serde_json::from_str(
            r#"{
                "id": 17,
                "name": "alice",
                "bio": "hello",
                "area": {"id": 3, "name": "Reykjavik"},
                "gender": null,
                "titleUnlockId": null,
                "type": {"id": 1, "label": "Editor"},
                "totalRevisions": 12,
                "revisionsApplied": 10,
                "revisionsReverted": 2,
                "createdAt": "2020-01-01T00:00:00Z",
                "activeAt": "2021-06-01T00:00:00Z",
                "metabrainzUserId": null,
                "cachedMetabrainzName": null,
                "activityData": {"2021-01": 3, "2021-02": 5}
            }"#,
        )
        .unwrap();

        assert_eq!(editor.name, "alice");
        assert_eq!(editor.area.as_ref().unwrap().id, 3);
        assert_eq!(editor.editor_type.label, "Editor");
        assert_eq!(editor.activity_data.counts(), vec![3, 5]);
    }

    #[test]
    fn test_editor_missing_bio_defaults_empty() {
        let editor: Editor = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "bob",
                "area": null,
                "gender": null,
                "titleUnlockId": null,
                "type": {"id": 1, "label": "Editor"},
                "totalRevisions": 0,
                "revisionsApplied": 0,
                "revisionsReverted": 0,
                "createdAt": "2020-01-01T00:00:00Z",
                "activeAt": "2020-01-01T00:00:00Z",
                "metabrainzUserId": null,
                "cachedMetabrainzName": null
            }"#,
        )
        .unwrap();

        assert!(editor.bio.is_empty());
        assert!(editor.activity_data.is_empty());
    }
}
