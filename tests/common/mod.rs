//! Helpers for integration tests.

#![allow(dead_code)]

use diesel::prelude::*;
use tempfile::NamedTempFile;
use trivia_api::db::{DbPool, establish_connection_pool, run_pending_migrations};
use trivia_api::schema::questions;

/// `(question, answer, category, difficulty)` rows loaded by [`TestDb::seeded`].
///
/// Categories 1 to 5 hold questions; category 6 (Sports) is left empty.
pub const SEED_QUESTIONS: [(&str, &str, i32, i32); 19] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("How many bones are in the adult human body?", "206", 1, 2),
    ("Which Dutch graphic artist created mind-bending lithographs?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism?", "Jackson Pollock", 2, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        5,
        4,
    ),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 5, 4),
    ("Who wrote the play Hamlet?", "William Shakespeare", 5, 1),
];

/// Number of seeded categories created by the initial migration.
pub const SEED_CATEGORY_COUNT: usize = 6;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    /// Migrated database holding only the seeded categories.
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        run_pending_migrations(&mut conn).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    /// Migrated database with every row of [`SEED_QUESTIONS`].
    pub fn seeded() -> Self {
        let test_db = Self::new();
        let mut conn = test_db
            .pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        for (question, answer, category, difficulty) in SEED_QUESTIONS {
            diesel::insert_into(questions::table)
                .values((
                    questions::question.eq(question),
                    questions::answer.eq(answer),
                    questions::category.eq(category),
                    questions::difficulty.eq(difficulty),
                ))
                .execute(&mut conn)
                .expect("Failed to seed question");
        }
        test_db
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Number of seeded questions whose text contains `term`, ignoring case.
pub fn seeded_matches(term: &str) -> usize {
    let term = term.to_lowercase();
    SEED_QUESTIONS
        .iter()
        .filter(|(question, ..)| question.to_lowercase().contains(&term))
        .count()
}
