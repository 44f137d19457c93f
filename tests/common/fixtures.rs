// Test fixtures: small blog corpora

use chrono::{DateTime, TimeZone, Utc};
use postrank::Document;

/// Midnight UTC on the given day
pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// Build a post with tags
pub fn post(
    id: u64,
    title: &str,
    body: &str,
    published: DateTime<Utc>,
    tags: &[&str],
) -> Document {
    Document::new(id, title, body, published).with_tags(tags.iter().copied())
}

/// A realistic set of published posts
#[allow(dead_code)] // Used by some test binaries only
pub fn blog_corpus() -> Vec<Document> {
    vec![
        post(
            1,
            "Django ORM in depth",
            "Managers, querysets and lookups explained with examples.",
            date(2024, 1, 10),
            &["python", "django", "orm"],
        ),
        post(
            2,
            "Getting started with Django",
            "Install the framework, create a project and run the server.",
            date(2024, 2, 3),
            &["python", "django"],
        ),
        post(
            3,
            "Who was Django Reinhardt?",
            "A Belgian-born jazz guitarist who shaped gypsy jazz.",
            date(2023, 11, 20),
            &["music", "jazz"],
        ),
        post(
            4,
            "Go concurrency patterns",
            "Channels, goroutines and select statements.",
            date(2024, 3, 1),
            &["go"],
        ),
        post(
            5,
            "Weekly notes",
            "This week: an orm migration in django, then more django orm tuning.",
            date(2024, 3, 8),
            &["python", "notes"],
        ),
        post(
            6,
            "Python packaging",
            "Wheels, sdists and pyproject files.",
            date(2023, 6, 1),
            &["python"],
        ),
    ]
}

/// Target tagged python+django with three candidates of varying overlap
#[allow(dead_code)] // Used by some test binaries only
pub fn python_django_neighbours() -> (Document, Vec<Document>) {
    let target = post(10, "Target", "body", date(2024, 6, 1), &["python", "django"]);
    let candidates = vec![
        post(11, "A", "body", date(2023, 1, 1), &["python"]),
        post(12, "B", "body", date(2023, 6, 1), &["python", "django"]),
        post(13, "C", "body", date(2024, 1, 1), &["go"]),
    ];
    (target, candidates)
}
