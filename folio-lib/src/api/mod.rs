use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::editor::{AchievementSet, Area, Editor, Gender, TitleUnlock};

/// Path the profile patch is posted to.
pub const EDIT_HANDLER_PATH: &str = "/editor/edit/handler";

#[derive(Debug, Error)]
pub enum Error {
    /// The server turned the request down. The message is the `error` field
    /// of the response body when present, otherwise the status line.
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The full draft, serialized atomically. `title` carries the unlock id,
/// matching what the edit handler expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub id: i64,
    pub name: String,
    pub bio: String,
    pub area_id: Option<i64>,
    pub gender_id: Option<i64>,
    pub title: Option<i64>,
}

/// Everything the profile screen needs, fetched in one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub editor: Editor,
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(default)]
    pub title_unlocks: Vec<TitleUnlock>,
    #[serde(default)]
    pub achievement: AchievementSet,
}

/// Client for the Folio server's editor endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submit an edited profile. Non-2xx responses become
    /// [`Error::Rejected`] with the server's message when it sent one.
    pub async fn submit_profile(&self, patch: ProfilePatch) -> Result<(), Error> {
        debug!("submitting profile patch for editor {}", patch.id);

        let response = self
            .http
            .post(format!("{}{EDIT_HANDLER_PATH}", self.base_url))
            .json(&patch)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Err(Error::Rejected(failure_message(status, &body)))
    }

    /// Fetch the profile page aggregate for an editor.
    pub async fn fetch_profile_page(&self, editor_id: i64) -> Result<ProfilePage, Error> {
        let response = self
            .http
            .get(format!("{}/editor/{editor_id}", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Autocomplete areas by name.
    pub async fn search_areas(&self, query: &str) -> Result<Vec<Area>, Error> {
        let response = self
            .http
            .get(format!("{}/search/autocomplete", self.base_url))
            .query(&[("collection", "area"), ("q", query)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch a badge image. Relative URLs are resolved against the server.
    pub async fn fetch_badge(&self, badge_url: &str) -> Result<Vec<u8>, Error> {
        let url = if badge_url.starts_with("http://") || badge_url.starts_with("https://") {
            badge_url.to_owned()
        } else {
            format!("{}{badge_url}", self.base_url)
        };

        let response = self.http.get(url).send().await?.error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}

/// Error text for a failed submission: the `error` field when the body is
/// JSON and carries one, otherwise the status line.
pub fn failure_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        })
}
