use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
    pub equipment_type: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Exercise {
    /// True for the default value handed back when no row matched.
    pub fn is_absent(&self) -> bool {
        self.id == 0
    }
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group: row.get("muscle_group")?,
            equipment_type: row.get("equipment_type")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

// Missing strings default to empty so the service reports which field is required.
#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub muscle_group: String,
    pub equipment_type: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateExercise> for Exercise {
    fn from(form: CreateExercise) -> Self {
        Self {
            name: form.name,
            muscle_group: form.muscle_group,
            equipment_type: form.equipment_type,
            notes: form.notes,
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub muscle_group: String,
    pub equipment_type: Option<String>,
    pub notes: Option<String>,
}

impl UpdateExercise {
    pub fn into_exercise(self, id: i64) -> Exercise {
        Exercise {
            id,
            name: self.name,
            muscle_group: self.muscle_group,
            equipment_type: self.equipment_type,
            notes: self.notes,
            ..Default::default()
        }
    }
}
