//! Grade domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::UNSET_ID;
use crate::Id;

/// Score of one student in one course. No range is enforced on `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(default)]
    pub id: Id,
    pub student_id: Id,
    pub course_id: Id,
    pub score: f64,
    pub comments: Option<String>,
}

impl Grade {
    pub fn new(student_id: Id, course_id: Id, score: f64) -> Self {
        Self {
            id: UNSET_ID,
            student_id,
            course_id,
            score,
            comments: None,
        }
    }

    /// Attach free-text comments
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn is_stored(&self) -> bool {
        self.id != UNSET_ID
    }
}
