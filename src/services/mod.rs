//! Validation and business rules between the HTTP handlers and storage.
//!
//! Services hold nothing but a shared repository handle, so they are cheap to
//! clone into handler state and safe to call concurrently.

pub mod exercise_service;
pub mod user_service;

pub use exercise_service::ExerciseService;
pub use user_service::UserService;
