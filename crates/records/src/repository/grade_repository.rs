//! Grade repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use common::AppResult;
use domain::{Grade, Id};

use super::base::{map_row, map_rows, CrudRepository};
use super::entities::grade::{self, ActiveModel, Entity as GradeEntity};
use crate::infra::{ConnectionProvider, ScopedConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::mock;

#[async_trait]
pub trait GradeRepository: CrudRepository<Grade> {
    /// All grades of one student, across courses
    async fn list_by_student(&self, student_id: Id) -> AppResult<Vec<Grade>>;

    /// All grades given in one course
    async fn list_by_course(&self, course_id: Id) -> AppResult<Vec<Grade>>;

    /// Grades of one student in one course. Nothing stops a pair from having
    /// several grades, so this is a list as well.
    async fn list_by_student_and_course(&self, student_id: Id, course_id: Id) -> AppResult<Vec<Grade>>;
}

#[cfg(any(test, feature = "test-utils"))]
mock! {
    pub GradeRepository {}

    #[async_trait]
    impl CrudRepository<Grade> for GradeRepository {
        async fn add(&self, item: Grade) -> AppResult<Grade>;
        async fn find_by_id(&self, id: Id) -> AppResult<Option<Grade>>;
        async fn list(&self) -> AppResult<Vec<Grade>>;
        async fn update(&self, item: &Grade) -> AppResult<u64>;
        async fn delete(&self, id: Id) -> AppResult<u64>;
    }

    #[async_trait]
    impl GradeRepository for GradeRepository {
        async fn list_by_student(&self, student_id: Id) -> AppResult<Vec<Grade>>;
        async fn list_by_course(&self, course_id: Id) -> AppResult<Vec<Grade>>;
        async fn list_by_student_and_course(&self, student_id: Id, course_id: Id) -> AppResult<Vec<Grade>>;
    }
}

/// Concrete implementation of GradeRepository over the `grades` table
pub struct GradeStore {
    connections: Arc<dyn ConnectionProvider>,
}

impl GradeStore {
    pub fn new(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self { connections }
    }

    async fn list_where(&self, condition: Condition) -> AppResult<Vec<Grade>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let rows = GradeEntity::find()
            .filter(condition)
            .order_by_asc(grade::Column::GradeId)
            .all(&*conn)
            .await?;
        conn.release().await;

        map_rows(rows)
    }
}

#[async_trait]
impl CrudRepository<Grade> for GradeStore {
    async fn add(&self, mut grade: Grade) -> AppResult<Grade> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = GradeEntity::insert(ActiveModel::from(&grade))
            .exec(&*conn)
            .await?;
        conn.release().await;

        grade.id = result.last_insert_id;
        tracing::debug!(
            grade_id = grade.id,
            student_id = grade.student_id,
            course_id = grade.course_id,
            "Grade added"
        );
        Ok(grade)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<Grade>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let row = GradeEntity::find_by_id(id).one(&*conn).await?;
        conn.release().await;

        map_row(row)
    }

    async fn list(&self) -> AppResult<Vec<Grade>> {
        self.list_where(Condition::all()).await
    }

    async fn update(&self, grade: &Grade) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = GradeEntity::update_many()
            .set(ActiveModel::from(grade))
            .filter(grade::Column::GradeId.eq(grade.id))
            .exec(&*conn)
            .await?;
        conn.release().await;

        tracing::debug!(grade_id = grade.id, rows = result.rows_affected, "Grade updated");
        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Id) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = GradeEntity::delete_by_id(id).exec(&*conn).await?;
        conn.release().await;

        tracing::debug!(grade_id = id, rows = result.rows_affected, "Grade deleted");
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl GradeRepository for GradeStore {
    async fn list_by_student(&self, student_id: Id) -> AppResult<Vec<Grade>> {
        self.list_where(Condition::all().add(grade::Column::StudentId.eq(student_id)))
            .await
    }

    async fn list_by_course(&self, course_id: Id) -> AppResult<Vec<Grade>> {
        self.list_where(Condition::all().add(grade::Column::CourseId.eq(course_id)))
            .await
    }

    async fn list_by_student_and_course(&self, student_id: Id, course_id: Id) -> AppResult<Vec<Grade>> {
        self.list_where(
            Condition::all()
                .add(grade::Column::StudentId.eq(student_id))
                .add(grade::Column::CourseId.eq(course_id)),
        )
        .await
    }
}
