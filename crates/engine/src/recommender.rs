//! The recommendation engine.
//!
//! ## Algorithm
//! 1. Build the exclusion set from liked and disliked titles
//! 2. Score every remaining movie in catalog order
//! 3. Drop movies scoring zero
//! 4. Stable sort by score, highest first (ties keep catalog order)
//! 5. Keep the first `limit` names

use crate::profile::PreferenceProfile;
use crate::scoring::{ExclusionSet, PreferenceMatcher, ScoreBreakdown};
use catalog::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Maximum number of names returned by default
pub const DEFAULT_LIMIT: usize = 10;

/// Ranks a shared, read-only catalog against per-request profiles.
///
/// The engine holds no per-request state, so one instance can serve many
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    limit: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Configure how many names to return (default: 10)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recommend movie names for one profile, best first
    pub fn recommend(&self, profile: &PreferenceProfile) -> Vec<String> {
        rank(&self.catalog, profile, self.limit)
    }

    /// Explain how a catalog movie scores for a profile.
    ///
    /// Returns `None` if the movie isn't in the catalog. Exclusion is not
    /// applied here.
    pub fn explain(&self, profile: &PreferenceProfile, name: &str) -> Option<ScoreBreakdown> {
        let movie = self.catalog.get_movie(name)?;
        Some(PreferenceMatcher::new(profile).breakdown(movie))
    }
}

/// Recommend up to [`DEFAULT_LIMIT`] movie names from `catalog`
pub fn recommend(profile: &PreferenceProfile, catalog: &Catalog) -> Vec<String> {
    rank(catalog, profile, DEFAULT_LIMIT)
}

#[instrument(
    skip_all,
    fields(
        directors = profile.directors.len(),
        actors = profile.actors.len(),
        genres = profile.genres.len(),
        limit = limit
    )
)]
fn rank(catalog: &Catalog, profile: &PreferenceProfile, limit: usize) -> Vec<String> {
    if !profile.has_scoring_preferences() {
        debug!("No director, actor or genre preferences; nothing can score");
        return Vec::new();
    }

    let excluded = ExclusionSet::new(profile);
    let matcher = PreferenceMatcher::new(profile);

    let mut skipped = 0usize;
    let mut candidates: Vec<(&str, u32)> = Vec::new();
    for movie in catalog.movies() {
        if excluded.is_excluded(&movie.name) {
            skipped += 1;
            continue;
        }
        let score = matcher.breakdown(movie).total();
        if score > 0 {
            candidates.push((movie.name.as_str(), score));
        }
    }

    debug!(
        "Scored {} movies: {} skipped by {} excluded names, {} candidates",
        catalog.len(),
        skipped,
        excluded.len(),
        candidates.len()
    );

    // sort_by is stable: equal scores stay in catalog order
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(limit);

    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect()
}
