//! Course domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::UNSET_ID;
use crate::Id;

/// A course run by a teacher.
///
/// `teacher_id` is expected to reference a stored [`User`](crate::User),
/// but nothing here checks that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Id,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Course {
    /// Create an undated course that has not been stored yet
    pub fn new(name: impl Into<String>, description: Option<String>, teacher_id: Id) -> Self {
        Self {
            id: UNSET_ID,
            name: name.into(),
            description,
            teacher_id,
            start_date: None,
            end_date: None,
        }
    }

    /// Set the start and end dates
    pub fn scheduled(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn is_stored(&self) -> bool {
        self.id != UNSET_ID
    }
}
