pub mod fuzz;
pub mod recommendations;
pub mod title_search;
pub mod views;

pub use title_search::SearchOptions;
