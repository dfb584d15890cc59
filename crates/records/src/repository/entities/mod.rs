//! SeaORM entity definitions
//!
//! These are table-shaped models separate from the domain entities.
//! Column names match the `users`, `courses` and `grades` schema exactly.

pub mod course;
pub mod grade;
pub mod user;

pub use course::{ActiveModel as CourseActiveModel, Entity as CourseEntity, Model as CourseModel};
pub use grade::{ActiveModel as GradeActiveModel, Entity as GradeEntity, Model as GradeModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
