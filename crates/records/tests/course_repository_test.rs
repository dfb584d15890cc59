//! Course repository integration tests against a temporary SQLite database.

mod support;

use chrono::NaiveDate;
use domain::Course;
use records::repository::{CourseRepository, CourseStore, CrudRepository};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rust_course(teacher_id: i32) -> Course {
    Course::new(
        "Introduction to Rust",
        Some("Ownership, borrowing and lifetimes".to_string()),
        teacher_id,
    )
    .scheduled(date(2024, 9, 2), date(2025, 1, 31))
}

#[tokio::test]
async fn test_add_then_find_by_id_round_trips() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());

    let added = store.add(rust_course(1)).await.unwrap();
    assert!(added.is_stored());

    let mut expected = rust_course(1);
    expected.id = added.id;
    assert_eq!(store.find_by_id(added.id).await.unwrap(), Some(expected));
}

#[tokio::test]
async fn test_undated_course_keeps_empty_dates() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());

    let added = store.add(Course::new("Reading group", None, 3)).await.unwrap();
    let found = store.find_by_id(added.id).await.unwrap().unwrap();

    assert_eq!(found.description, None);
    assert_eq!(found.start_date, None);
    assert_eq!(found.end_date, None);
}

#[tokio::test]
async fn test_find_by_unknown_id_is_none() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());

    assert_eq!(store.find_by_id(99).await.unwrap(), None);
}

#[tokio::test]
async fn test_list_by_teacher_partitions_list() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());

    for teacher_id in [1, 2, 1, 3, 1] {
        store.add(rust_course(teacher_id)).await.unwrap();
    }

    let all = store.list().await.unwrap();
    assert_eq!(all.len(), 5);

    for teacher_id in [1, 2, 3, 4] {
        let expected: Vec<Course> = all
            .iter()
            .filter(|c| c.teacher_id == teacher_id)
            .cloned()
            .collect();
        assert_eq!(store.list_by_teacher(teacher_id).await.unwrap(), expected);
    }
    assert!(store.list_by_teacher(4).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_overwrites_all_attributes() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());

    let mut course = store.add(rust_course(1)).await.unwrap();
    course.name = "Advanced Rust".to_string();
    course.description = None;
    course.teacher_id = 2;
    course.start_date = Some(date(2025, 2, 3));
    course.end_date = None;

    assert_eq!(store.update(&course).await.unwrap(), 1);
    assert_eq!(store.find_by_id(course.id).await.unwrap(), Some(course));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = support::setup().await;
    let store = CourseStore::new(db.connections());
    let course = store.add(rust_course(1)).await.unwrap();

    assert_eq!(store.delete(course.id).await.unwrap(), 1);
    assert_eq!(store.delete(course.id).await.unwrap(), 0);
    assert_eq!(store.find_by_id(course.id).await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
}
