use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Definition of an achievement: what it's called and what its badge
/// looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDef {
    pub name: String,
    pub description: String,
    pub badge_url: String,
}

/// One achievement an editor has unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: i64,
    pub unlocked_at: DateTime<Utc>,
    pub achievement: AchievementDef,
}

/// The unlocked achievements shown in the badge gallery, plus the total
/// number available server-side (when reported).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementSet {
    #[serde(default)]
    pub model: Vec<Achievement>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl AchievementSet {
    // The wire shape carries a redundant `length`; derive it instead.
    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_from_wire() {
        let set: AchievementSet = serde_json::from_str(
            r#"{
                "length": 1,
                "total": 20,
                "model": [{
                    "id": 4,
                    "unlockedAt": "2021-05-01T10:00:00Z",
                    "achievement": {
                        "name": "Revisionist",
                        "description": "Made 1 revision",
                        "badgeUrl": "/images/revisionist.svg"
                    }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.total, Some(20));
        assert_eq!(
            set.model.first().unwrap().achievement.name,
            "Revisionist"
        );
    }
}
