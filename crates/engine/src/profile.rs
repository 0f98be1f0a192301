//! User preference profiles.
//!
//! A profile is the whole input of one recommendation request. Every field
//! is optional: a missing field behaves exactly like an empty one.

use crate::error::Result;
use catalog::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Input map keys understood by [`PreferenceProfile::from_map`]
pub const LIKED_MOVIES_KEY: &str = "likedMovies";
pub const DISLIKED_MOVIES_KEY: &str = "dislikedMovies";
pub const GENRES_KEY: &str = "genres";
pub const ACTORS_KEY: &str = "actors";
pub const DIRECTORS_KEY: &str = "directors";

/// One user's stated preferences for a single request.
///
/// Liked and disliked movies are only used to exclude titles; genres, actors
/// and directors drive the score.
///
/// Deserializes from the same camelCase keys as [`PreferenceProfile::from_map`];
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub liked_movies: HashSet<String>,
    pub disliked_movies: HashSet<String>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from a key -> list mapping.
    ///
    /// Unknown keys are ignored and missing keys are treated as empty.
    pub fn from_map(map: &HashMap<String, Vec<String>>) -> Self {
        let list = |key: &str| map.get(key).cloned().unwrap_or_default();
        Self {
            liked_movies: list(LIKED_MOVIES_KEY).into_iter().collect(),
            disliked_movies: list(DISLIKED_MOVIES_KEY).into_iter().collect(),
            genres: list(GENRES_KEY),
            actors: list(ACTORS_KEY),
            directors: list(DIRECTORS_KEY),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_liked(mut self, name: impl Into<String>) -> Self {
        self.liked_movies.insert(name.into());
        self
    }

    pub fn with_disliked(mut self, name: impl Into<String>) -> Self {
        self.disliked_movies.insert(name.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actors.push(actor.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.directors.push(director.into());
        self
    }

    /// Preferred values for one scoring dimension
    pub fn preferences(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Director => &self.directors,
            Dimension::Actor => &self.actors,
            Dimension::Genre => &self.genres,
        }
    }

    /// True when at least one scoring dimension has a preference.
    ///
    /// Without one, no movie can score above zero.
    pub fn has_scoring_preferences(&self) -> bool {
        Dimension::ALL
            .iter()
            .any(|&dimension| !self.preferences(dimension).is_empty())
    }

    /// Combine two profiles; list fields of `other` are appended.
    pub fn merge(mut self, other: PreferenceProfile) -> Self {
        self.liked_movies.extend(other.liked_movies);
        self.disliked_movies.extend(other.disliked_movies);
        self.genres.extend(other.genres);
        self.actors.extend(other.actors);
        self.directors.extend(other.directors);
        self
    }
}
