//! Repository layer - Data access abstraction
//!
//! One store per table. Stores share nothing but the connection provider.

mod base;
mod course_repository;
pub mod entities;
mod grade_repository;
mod user_repository;

pub use base::CrudRepository;
pub use course_repository::{CourseRepository, CourseStore};
pub use grade_repository::{GradeRepository, GradeStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use grade_repository::MockGradeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
