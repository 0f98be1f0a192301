//! Integer relevance scoring.
//!
//! A movie's score is
//! `5 × director matches + 3 × actor matches + 2 × genre matches`.
//!
//! Matches are counted on the movie side: a movie listing the same director
//! twice counts twice. A preference listed twice still only matches once.

use crate::profile::PreferenceProfile;
use catalog::{Dimension, Movie, fold_key as fold};
use std::collections::HashSet;

pub const DIRECTOR_WEIGHT: u32 = 5;
pub const ACTOR_WEIGHT: u32 = 3;
pub const GENRE_WEIGHT: u32 = 2;

/// Points awarded per match in a dimension
pub fn weight(dimension: Dimension) -> u32 {
    match dimension {
        Dimension::Director => DIRECTOR_WEIGHT,
        Dimension::Actor => ACTOR_WEIGHT,
        Dimension::Genre => GENRE_WEIGHT,
    }
}

/// A profile's preferences, lower-cased once per request.
#[derive(Debug, Clone, Default)]
pub struct PreferenceMatcher {
    directors: Vec<String>,
    actors: Vec<String>,
    genres: Vec<String>,
}

impl PreferenceMatcher {
    pub fn new(profile: &PreferenceProfile) -> Self {
        let folded = |dimension: Dimension| -> Vec<String> {
            profile
                .preferences(dimension)
                .iter()
                .map(|p| fold(p))
                .collect()
        };
        Self {
            directors: folded(Dimension::Director),
            actors: folded(Dimension::Actor),
            genres: folded(Dimension::Genre),
        }
    }

    fn preferred(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Director => &self.directors,
            Dimension::Actor => &self.actors,
            Dimension::Genre => &self.genres,
        }
    }

    /// Number of the movie's values in `dimension` that match any preference
    pub fn count_matches(&self, movie: &Movie, dimension: Dimension) -> u32 {
        let preferred = self.preferred(dimension);
        if preferred.is_empty() {
            return 0;
        }

        movie
            .attributes(dimension)
            .iter()
            .filter(|value| {
                let value = fold(value);
                preferred.iter().any(|p| *p == value)
            })
            .count() as u32
    }

    pub fn breakdown(&self, movie: &Movie) -> ScoreBreakdown {
        ScoreBreakdown {
            director_matches: self.count_matches(movie, Dimension::Director),
            actor_matches: self.count_matches(movie, Dimension::Actor),
            genre_matches: self.count_matches(movie, Dimension::Genre),
        }
    }
}

/// Per-dimension match counts behind a movie's score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub director_matches: u32,
    pub actor_matches: u32,
    pub genre_matches: u32,
}

impl ScoreBreakdown {
    pub fn matches(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Director => self.director_matches,
            Dimension::Actor => self.actor_matches,
            Dimension::Genre => self.genre_matches,
        }
    }

    pub fn total(&self) -> u32 {
        Dimension::ALL
            .iter()
            .map(|&dimension| self.matches(dimension) * weight(dimension))
            .sum()
    }
}

/// Score one movie against a prepared matcher
pub fn score_movie(matcher: &PreferenceMatcher, movie: &Movie) -> u32 {
    matcher.breakdown(movie).total()
}

/// Liked and disliked titles, compared ignoring case
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new(profile: &PreferenceProfile) -> Self {
        let names = profile
            .liked_movies
            .iter()
            .chain(&profile.disliked_movies)
            .map(|name| fold(name))
            .collect();
        Self { names }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Movie {
        Movie::new("Inception")
            .with_genres(["Action", "Sci-Fi"])
            .with_actors(["Leonardo DiCaprio", "Tom Hardy"])
            .with_directors(["Christopher Nolan"])
    }

    #[test]
    fn test_weights_priority() {
        assert!(weight(Dimension::Director) > weight(Dimension::Actor));
        assert!(weight(Dimension::Actor) > weight(Dimension::Genre));
    }

    #[test]
    fn test_score_all_dimensions() {
        let profile = PreferenceProfile::new()
            .with_director("christopher nolan")
            .with_actor("TOM HARDY")
            .with_actor("Leonardo DiCaprio")
            .with_genre("sci-fi");
        let matcher = PreferenceMatcher::new(&profile);

        let breakdown = matcher.breakdown(&inception());

        assert_eq!(
            breakdown,
            ScoreBreakdown {
                director_matches: 1,
                actor_matches: 2,
                genre_matches: 1,
            }
        );
        assert_eq!(score_movie(&matcher, &inception()), 5 + 6 + 2);
    }

    #[test]
    fn test_duplicate_movie_values_count_twice() {
        let movie = Movie::new("Twice").with_directors(["A", "a"]);
        let matcher = PreferenceMatcher::new(&PreferenceProfile::new().with_director("A"));

        assert_eq!(score_movie(&matcher, &movie), 10);
    }

    #[test]
    fn test_duplicate_preferences_count_once() {
        let movie = Movie::new("Once").with_genres(["Drama"]);
        let profile = PreferenceProfile::new().with_genre("Drama").with_genre("drama");
        let matcher = PreferenceMatcher::new(&profile);

        assert_eq!(score_movie(&matcher, &movie), 2);
    }

    #[test]
    fn test_empty_lists_score_zero() {
        let matcher = PreferenceMatcher::new(&PreferenceProfile::new());
        assert_eq!(score_movie(&matcher, &inception()), 0);

        let profile = PreferenceProfile::new().with_genre("Drama");
        let matcher = PreferenceMatcher::new(&profile);
        assert_eq!(score_movie(&matcher, &Movie::new("Bare")), 0);
    }

    #[test]
    fn test_no_partial_matching() {
        let matcher = PreferenceMatcher::new(&PreferenceProfile::new().with_director("Nolan"));
        assert_eq!(score_movie(&matcher, &inception()), 0);
    }

    #[test]
    fn test_exclusion_set_ignores_case() {
        let profile = PreferenceProfile::new()
            .with_liked("Inception")
            .with_disliked("heat")
            .with_liked("INCEPTION");
        let excluded = ExclusionSet::new(&profile);

        assert_eq!(excluded.len(), 2);
        assert!(excluded.is_excluded("inception"));
        assert!(excluded.is_excluded("Heat"));
        assert!(!excluded.is_excluded("Ronin"));
    }

    #[test]
    fn test_dotted_capital_i_matches_plain_i() {
        let movie = Movie::new("Yol").with_directors(["Yılmaz Güney", "İlker"]);
        let matcher = PreferenceMatcher::new(&PreferenceProfile::new().with_director("ilker"));

        assert_eq!(score_movie(&matcher, &movie), 5);
    }
}
