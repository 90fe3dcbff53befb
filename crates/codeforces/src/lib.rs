pub mod client;
pub mod error;
pub mod models;
pub mod rating;
pub mod stats;

pub use client::CodeforcesClient;
pub use error::{CodeforcesError, Result};
pub use models::{Problem, RatingChange, Submission};
pub use rating::{RatingPoint, RatingWindow};
pub use stats::ProblemStats;
