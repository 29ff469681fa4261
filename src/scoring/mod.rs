pub mod analysis;
pub mod rules;
pub mod scorer;

pub use analysis::Analyzer;
