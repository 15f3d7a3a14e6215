pub mod genre;
pub mod item;

pub use genre::{Genre, GENRE_COUNT};
pub use item::{CandidateItem, MediaType, ScoredItem};
