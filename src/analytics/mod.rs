pub mod diversity;
pub mod engine;
pub mod filters;
pub mod genres;
pub mod peak;
pub mod premium;
pub mod scoring;
pub mod tiers;

pub use diversity::cross_genre_artists;
pub use engine::AnalyticsEngine;
pub use genres::genre_metrics;
pub use peak::peak_performance_window;
pub use premium::premium_playlist;
pub use tiers::categorize_artists;
