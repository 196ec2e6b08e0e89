pub mod exercise;
pub mod from_row;
pub mod user;

pub use exercise::{CreateExercise, Exercise, UpdateExercise};
pub use from_row::FromSqliteRow;
pub use user::{CreateUser, User};
