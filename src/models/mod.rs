mod de;
pub mod movie;
pub mod similarity;

pub use movie::{Crew, CrewCredit, CrewRole, Movie};
pub use similarity::{SimilarCandidate, SimilarityEntry};
