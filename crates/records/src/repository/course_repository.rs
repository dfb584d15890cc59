//! Course repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use common::AppResult;
use domain::{Course, Id};

use super::base::{map_row, map_rows, CrudRepository};
use super::entities::course::{self, ActiveModel, Entity as CourseEntity};
use crate::infra::{ConnectionProvider, ScopedConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::mock;

#[async_trait]
pub trait CourseRepository: CrudRepository<Course> {
    /// All courses run by one teacher
    async fn list_by_teacher(&self, teacher_id: Id) -> AppResult<Vec<Course>>;
}

#[cfg(any(test, feature = "test-utils"))]
mock! {
    pub CourseRepository {}

    #[async_trait]
    impl CrudRepository<Course> for CourseRepository {
        async fn add(&self, item: Course) -> AppResult<Course>;
        async fn find_by_id(&self, id: Id) -> AppResult<Option<Course>>;
        async fn list(&self) -> AppResult<Vec<Course>>;
        async fn update(&self, item: &Course) -> AppResult<u64>;
        async fn delete(&self, id: Id) -> AppResult<u64>;
    }

    #[async_trait]
    impl CourseRepository for CourseRepository {
        async fn list_by_teacher(&self, teacher_id: Id) -> AppResult<Vec<Course>>;
    }
}

/// Concrete implementation of CourseRepository over the `courses` table
pub struct CourseStore {
    connections: Arc<dyn ConnectionProvider>,
}

impl CourseStore {
    pub fn new(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl CrudRepository<Course> for CourseStore {
    async fn add(&self, mut course: Course) -> AppResult<Course> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = CourseEntity::insert(ActiveModel::from(&course))
            .exec(&*conn)
            .await?;
        conn.release().await;

        course.id = result.last_insert_id;
        tracing::debug!(course_id = course.id, teacher_id = course.teacher_id, "Course added");
        Ok(course)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Course>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let row = CourseEntity::find_by_id(id).one(&*conn).await?;
        conn.release().await;

        map_row(row)
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let rows = CourseEntity::find()
            .order_by_asc(course::Column::CourseId)
            .all(&*conn)
            .await?;
        conn.release().await;

        map_rows(rows)
    }

    async fn update(&self, course: &Course) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = CourseEntity::update_many()
            .set(ActiveModel::from(course))
            .filter(course::Column::CourseId.eq(course.id))
            .exec(&*conn)
            .await?;
        conn.release().await;

        tracing::debug!(course_id = course.id, rows = result.rows_affected, "Course updated");
        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Id) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = CourseEntity::delete_by_id(id).exec(&*conn).await?;
        conn.release().await;

        tracing::debug!(course_id = id, rows = result.rows_affected, "Course deleted");
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn list_by_teacher(&self, teacher_id: Id) -> AppResult<Vec<Course>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let rows = CourseEntity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .order_by_asc(course::Column::CourseId)
            .all(&*conn)
            .await?;
        conn.release().await;

        map_rows(rows)
    }
}
