// Data models shared by the admin domain services

pub mod exercise;
pub mod exercise_link;
pub mod reference_data;
pub mod workout_template;

pub use exercise::*;
pub use exercise_link::*;
pub use reference_data::*;
pub use workout_template::*;
