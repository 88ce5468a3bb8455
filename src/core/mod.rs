pub mod movie;
pub mod verdict;

pub use movie::{Frame, GameMode, Genre, Movie};
pub use verdict::{MatchReport, MatchType, MatchVerdict};
