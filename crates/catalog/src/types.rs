//! Core domain types for the movie catalog.
//!
//! A [`Catalog`] is an ordered, read-only snapshot of movies. Its enumeration
//! order is stable and is the order ties are broken in when ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Movie
// =============================================================================

/// One catalog entry.
///
/// All attribute lists are ordered and may contain duplicates; the engine
/// counts every occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
}

impl Movie {
    /// Create a movie with no genres, actors or directors
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genres: Vec::new(),
            actors: Vec::new(),
            directors: Vec::new(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_directors<I, S>(mut self, directors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directors = directors.into_iter().map(Into::into).collect();
        self
    }

    /// The attribute list for one dimension
    pub fn attributes(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Director => &self.directors,
            Dimension::Actor => &self.actors,
            Dimension::Genre => &self.genres,
        }
    }
}

/// The scorable attribute categories of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Director,
    Actor,
    Genre,
}

impl Dimension {
    /// All dimensions, in priority order
    pub const ALL: [Dimension; 3] = [Dimension::Director, Dimension::Actor, Dimension::Genre];
}

/// Lower-case key used for every case-insensitive comparison.
///
/// Folds one character at a time with its simple lowercase mapping, so
/// `"İ"` folds to `"i"` and a word-final `"Σ"` folds to `"σ"`.
pub fn fold_key(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

// =============================================================================
// Catalog - ordered in-memory movie store
// =============================================================================

/// Ordered movie store with case-insensitive name lookup.
///
/// Movies live in a `Vec` so iteration follows insertion order; indices hold
/// positions into that `Vec`.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,

    /// Lower-cased name -> position in `movies`
    pub(crate) name_index: HashMap<String, usize>,

    /// (dimension, lower-cased value) -> positions of movies carrying it
    pub(crate) attribute_index: HashMap<(Dimension, String), Vec<usize>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a movie by name, ignoring case
    pub fn get_movie(&self, name: &str) -> Option<&Movie> {
        self.name_index
            .get(&fold_key(name))
            .map(|&pos| &self.movies[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(&fold_key(name))
    }

    /// Iterate movies in catalog order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies carrying `value` in the given dimension, in catalog order
    pub fn movies_by(&self, dimension: Dimension, value: &str) -> Vec<&Movie> {
        self.attribute_index
            .get(&(dimension, fold_key(value)))
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// Insert a movie, keeping the attribute index current.
    ///
    /// A movie whose name matches an existing entry (ignoring case) replaces
    /// it in place, keeping the original position. Returns the replaced movie.
    pub fn insert_movie(&mut self, movie: Movie) -> Option<Movie> {
        let key = fold_key(&movie.name);
        match self.name_index.get(&key) {
            Some(&pos) => {
                self.unindex_attributes(pos);
                let old = std::mem::replace(&mut self.movies[pos], movie);
                self.index_attributes(pos);
                Some(old)
            }
            None => {
                let pos = self.movies.len();
                self.name_index.insert(key, pos);
                self.movies.push(movie);
                self.index_attributes(pos);
                None
            }
        }
    }

    /// Add the movie at `pos` under each of its attribute values.
    ///
    /// Position lists stay sorted and hold each position once.
    pub(crate) fn index_attributes(&mut self, pos: usize) {
        let movie = &self.movies[pos];
        for dimension in Dimension::ALL {
            for value in movie.attributes(dimension) {
                let positions = self
                    .attribute_index
                    .entry((dimension, fold_key(value)))
                    .or_default();
                if let Err(at) = positions.binary_search(&pos) {
                    positions.insert(at, pos);
                }
            }
        }
    }

    /// Drop the movie at `pos` from the attribute index
    fn unindex_attributes(&mut self, pos: usize) {
        let movie = &self.movies[pos];
        for dimension in Dimension::ALL {
            for value in movie.attributes(dimension) {
                let key = (dimension, fold_key(value));
                if let Some(positions) = self.attribute_index.get_mut(&key) {
                    positions.retain(|&p| p != pos);
                    if positions.is_empty() {
                        self.attribute_index.remove(&key);
                    }
                }
            }
        }
    }

    /// Get counts for debugging/validation:
    /// (movies, distinct genres, distinct actors, distinct directors)
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        let distinct = |dimension: Dimension| {
            self.attribute_index
                .keys()
                .filter(|(d, _)| *d == dimension)
                .count()
        };
        (
            self.movies.len(),
            distinct(Dimension::Genre),
            distinct(Dimension::Actor),
            distinct(Dimension::Director),
        )
    }
}

impl FromIterator<Movie> for Catalog {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for movie in iter {
            catalog.insert_movie(movie);
        }
        catalog
    }
}
