pub mod bindings;
pub mod espn;
pub mod provider;

pub use bindings::SourceBindings;
pub use espn::DEFAULT_ESPN_BASE_URL;
pub use provider::{MatchSource, SourceError};
