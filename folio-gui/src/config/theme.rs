use serde::{Deserialize, Serialize};

/// GUI theme, persisted by name.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }
}
