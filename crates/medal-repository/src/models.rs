//! Achievement rows on both sides of the migration

use serde::{Deserialize, Serialize};

/// Achievement row as stored before migration
///
/// `cond` is the raw condition expression, e.g.
/// `(score.mods & 1 == 0) and 2000 <= score.max_combo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mysql", derive(sqlx::FromRow))]
pub struct LegacyAchievement {
    pub id: i32,
    /// Icon file name
    pub file: String,
    pub name: String,
    pub desc: String,
    pub cond: String,
}

/// Achievement row as stored after migration
///
/// `cond` is the translated condition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i32,
    /// Icon file name
    pub file: String,
    pub name: String,
    pub desc: String,
    pub cond: serde_json::Value,
}

impl Achievement {
    /// Carry a legacy row over with a translated condition
    pub fn migrated_from(legacy: &LegacyAchievement, cond: serde_json::Value) -> Self {
        Self {
            id: legacy.id,
            file: legacy.file.clone(),
            name: legacy.name.clone(),
            desc: legacy.desc.clone(),
            cond,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_migrated_from_keeps_metadata() {
        let legacy = LegacyAchievement {
            id: 7,
            file: "osu-combo-500".to_string(),
            name: "500 Combo".to_string(),
            desc: "500 big ones! You're moving up in the world!".to_string(),
            cond: "500 <= score.max_combo".to_string(),
        };
        let cond = json!({"type": "and", "conditions": []});

        let migrated = Achievement::migrated_from(&legacy, cond.clone());

        assert_eq!(migrated.id, 7);
        assert_eq!(migrated.file, legacy.file);
        assert_eq!(migrated.name, legacy.name);
        assert_eq!(migrated.desc, legacy.desc);
        assert_eq!(migrated.cond, cond);
    }

    #[test]
    fn test_legacy_row_json_shape() {
        let row: LegacyAchievement = serde_json::from_str(
            r#"{"id":1,"file":"all-intro-nofail","name":"Risk Averse","desc":"Safety nets are fun!","cond":"score.mods & 1"}"#,
        )
        .unwrap();
        assert_eq!(row.cond, "score.mods & 1");
    }
}
