pub mod catalog;
pub mod similarity;
pub mod snapshot;

pub use catalog::Catalog;
pub use similarity::SimilarityIndex;
pub use snapshot::Snapshot;
