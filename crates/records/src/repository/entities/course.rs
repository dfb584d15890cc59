//! `courses` table entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::Course;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub course_id: i32,
    pub course_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub teacher_id: i32,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Course {
            id: model.course_id,
            name: model.course_name,
            description: model.description,
            teacher_id: model.teacher_id,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

impl From<&Course> for ActiveModel {
    fn from(course: &Course) -> Self {
        ActiveModel {
            course_id: NotSet,
            course_name: Set(course.name.clone()),
            description: Set(course.description.clone()),
            teacher_id: Set(course.teacher_id),
            start_date: Set(course.start_date),
            end_date: Set(course.end_date),
        }
    }
}
