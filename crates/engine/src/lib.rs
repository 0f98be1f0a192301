//! Preference-based movie ranking.
//!
//! This crate provides:
//! - `PreferenceProfile`: one user's liked/disliked titles and preferred
//!   directors, actors and genres
//! - `scoring`: the fixed-weight integer score (director 5, actor 3, genre 2)
//! - `RecommendationEngine` / `recommend`: exclude, score, sort, truncate
//!
//! ## Example Usage
//! ```ignore
//! use engine::{PreferenceProfile, RecommendationEngine};
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_file(path)?);
//! let engine = RecommendationEngine::new(catalog);
//!
//! let profile = PreferenceProfile::new()
//!     .with_liked("Inception")
//!     .with_director("Christopher Nolan")
//!     .with_genre("Sci-Fi");
//!
//! let names: Vec<String> = engine.recommend(&profile);
//! ```

pub mod error;
pub mod profile;
pub mod scoring;
pub mod recommender;

// Re-export main types
pub use error::ProfileError;
pub use profile::PreferenceProfile;
pub use scoring::{ScoreBreakdown, score_movie};
pub use recommender::{DEFAULT_LIMIT, RecommendationEngine, recommend};
