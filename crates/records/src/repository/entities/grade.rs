//! `grades` table entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::Grade;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub grade_id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub score: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Grade {
    fn from(model: Model) -> Self {
        Grade {
            id: model.grade_id,
            student_id: model.student_id,
            course_id: model.course_id,
            score: model.score,
            comments: model.comments,
        }
    }
}

impl From<&Grade> for ActiveModel {
    fn from(grade: &Grade) -> Self {
        ActiveModel {
            grade_id: NotSet,
            student_id: Set(grade.student_id),
            course_id: Set(grade.course_id),
            score: Set(grade.score),
            comments: Set(grade.comments.clone()),
        }
    }
}
