use diesel::prelude::*;
use trivia_api::schema::categories;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_seed_categories() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let labels: Vec<String> = categories::table
        .order(categories::id.asc())
        .select(categories::type_)
        .load(&mut conn)
        .expect("should load categories");

    assert_eq!(
        labels,
        vec!["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
}
