use std::fmt;

use serde::{Deserialize, Serialize};

/// A title an editor can earn and display next to their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Grant record tying a [`Title`] to the editor that unlocked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleUnlock {
    pub id: i64,
    pub title: Title,
}

/// A select option for the title field: the unlock's identity with the
/// inner title's label. Built as a fresh copy so the shared unlock list is
/// never written through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOption {
    pub unlock_id: i64,
    pub label: String,
}

impl TitleOption {
    pub fn from_unlocks(unlocks: &[TitleUnlock]) -> Vec<Self> {
        unlocks
            .iter()
            .map(|unlock| Self {
                unlock_id: unlock.id,
                label: unlock.title.title.clone(),
            })
            .collect()
    }
}

impl fmt::Display for TitleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_option_carries_unlock_id_and_title_label() {
        let unlocks = vec![
            TitleUnlock {
                id: 7,
                title: Title {
                    id: 1,
                    title: "Sprinter".to_owned(),
                    description: "Quick off the mark".to_owned(),
                },
            },
            TitleUnlock {
                id: 9,
                title: Title {
                    id: 2,
                    title: "Fun Runner".to_owned(),
                    description: String::new(),
                },
            },
        ];

        let options = TitleOption::from_unlocks(&unlocks);

        assert_eq!(
            options,
            vec![
                TitleOption {
                    unlock_id: 7,
                    label: "Sprinter".to_owned()
                },
                TitleOption {
                    unlock_id: 9,
                    label: "Fun Runner".to_owned()
                },
            ]
        );
        // Source list untouched.
        assert_eq!(unlocks.first().unwrap().title.title, "Sprinter");
    }
}
