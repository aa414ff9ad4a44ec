//! Repository layer: one zero-sized struct per table, each exposing
//! associated async functions that take a `&PgPool`.

pub mod person_repo;

pub use person_repo::PersonRepo;
