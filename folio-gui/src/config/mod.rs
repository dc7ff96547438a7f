use std::fs;

use folio_lib::fs::config_dir;
use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// The GUI's configuration, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    pub theme: Theme,
    pub server: Server,
}

/// Where the Folio server lives and who we are on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub base_url: String,
    /// Editor whose profile the app opens on.
    pub editor_id: i64,
    /// The signed-in editor, if any. Only decides owner-only affordances;
    /// authentication itself happens server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_id: Option<i64>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9099".into(),
            editor_id: 1,
            viewer_id: None,
        }
    }
}

impl GuiConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let contents = toml::to_string_pretty(self).unwrap();

        // Make sure config_dir exists
        fs::create_dir_all(config_dir()).unwrap();

        fs::write(config_dir().join(FILE_NAME), contents).unwrap();
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_survive_toml_round_trip() {
        let cfg = GuiConfig::default();

        let contents = toml::to_string_pretty(&cfg).unwrap();
        let loaded: GuiConfig = toml::from_str(&contents).unwrap();

        assert_eq!(loaded.server.base_url, "http://localhost:9099");
        assert_eq!(loaded.server.editor_id, 1);
        assert!(loaded.server.viewer_id.is_none());
    }

    #[test]
    fn test_parses_server_table() {
        let loaded: GuiConfig = toml::from_str(
            "theme = \"light\"\n\
             \n\
             [server]\n\
             base_url = \"https://folio.example\"\n\
             editor_id = 17\n\
             viewer_id = 17\n",
        )
        .unwrap();

        assert_eq!(loaded.server.base_url, "https://folio.example");
        assert_eq!(loaded.server.viewer_id, Some(17));
        assert!(matches!(loaded.theme, Theme::Light));
    }

    #[test]
    fn test_unrecognized_contents_fall_back_to_defaults() {
        // Mirrors load(): a file we can't make sense of becomes defaults
        let loaded: GuiConfig = toml::from_str("[window]\nwidth = -3").unwrap_or_default();

        assert_eq!(loaded.server.editor_id, 1);
    }
}
