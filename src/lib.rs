//! Core library exports for the trivia service.
//!
//! This crate exposes the domain, persistence, forms, services and routes of
//! a small JSON API serving trivia categories, questions and quizzes.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Size of one page of `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;
