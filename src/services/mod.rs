pub mod geo;
pub mod location;
pub mod prompt;
pub mod ranking;
pub mod recommendations;

pub use location::LocationOverride;
pub use recommendations::RecommendationEngine;
