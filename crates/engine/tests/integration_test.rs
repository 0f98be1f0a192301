//! Integration tests for the recommendation engine.
//!
//! These run the catalog and engine crates together the way the CLI does.

use catalog::{Catalog, Movie};
use engine::scoring::PreferenceMatcher;
use engine::{PreferenceProfile, RecommendationEngine, recommend, score_movie};
use std::collections::HashMap;
use std::sync::Arc;

fn inception_catalog() -> Catalog {
    vec![
        Movie::new("Inception")
            .with_directors(["Christopher Nolan"])
            .with_actors(["Leonardo DiCaprio"])
            .with_genres(["Sci-Fi"]),
    ]
    .into_iter()
    .collect()
}

fn create_mixed_catalog() -> Catalog {
    let movies = vec![
        Movie::new("Inception")
            .with_genres(["Action", "Sci-Fi", "Thriller"])
            .with_actors(["Leonardo DiCaprio", "Tom Hardy"])
            .with_directors(["Christopher Nolan"]),
        Movie::new("The Revenant")
            .with_genres(["Adventure", "Drama"])
            .with_actors(["Leonardo DiCaprio", "Tom Hardy"])
            .with_directors(["Alejandro G. Iñárritu"]),
        Movie::new("Dunkirk")
            .with_genres(["Action", "Drama", "War"])
            .with_actors(["Tom Hardy", "Cillian Murphy"])
            .with_directors(["Christopher Nolan"]),
        Movie::new("Mad Max: Fury Road")
            .with_genres(["Action", "Sci-Fi"])
            .with_actors(["Tom Hardy", "Charlize Theron"])
            .with_directors(["George Miller"]),
        Movie::new("Amélie")
            .with_genres(["Comedy", "Romance"])
            .with_actors(["Audrey Tautou"])
            .with_directors(["Jean-Pierre Jeunet"]),
    ];
    Catalog::from_movies(movies).unwrap()
}

#[test]
fn scenario_director_match_is_case_insensitive() {
    let profile = PreferenceProfile::new().with_director("christopher nolan");
    assert_eq!(recommend(&profile, &inception_catalog()), vec!["Inception"]);
}

#[test]
fn scenario_liked_movie_is_excluded() {
    let profile = PreferenceProfile::new()
        .with_liked("Inception")
        .with_director("christopher nolan");
    assert!(recommend(&profile, &inception_catalog()).is_empty());
}

#[test]
fn scenario_output_truncated_to_ten() {
    let catalog: Catalog = (1..=15)
        .map(|i| Movie::new(format!("Action Movie {i}")).with_genres(["Action"]))
        .collect();
    let profile = PreferenceProfile::new().with_genre("Action");

    let names = recommend(&profile, &catalog);

    assert_eq!(names.len(), 10);
    let expected: Vec<String> = (1..=10).map(|i| format!("Action Movie {i}")).collect();
    assert_eq!(names, expected, "ties keep catalog order");

    let matcher = PreferenceMatcher::new(&profile);
    for name in &names {
        let movie = catalog.get_movie(name).unwrap();
        assert_eq!(score_movie(&matcher, movie), 2);
    }
}

#[test]
fn scenario_unmatched_genre_returns_nothing() {
    let profile = PreferenceProfile::new().with_genre("Drama");
    assert!(recommend(&profile, &inception_catalog()).is_empty());
}

#[test]
fn scenario_duplicate_director_counts_twice() {
    let movie = Movie::new("Double").with_directors(["A", "A"]);
    let matcher = PreferenceMatcher::new(&PreferenceProfile::new().with_director("A"));
    assert_eq!(score_movie(&matcher, &movie), 10);
}

#[test]
fn empty_profile_returns_nothing() {
    let catalog = create_mixed_catalog();

    assert!(recommend(&PreferenceProfile::new(), &catalog).is_empty());

    let only_likes = PreferenceProfile::new()
        .with_liked("Inception")
        .with_disliked("Amélie");
    assert!(recommend(&only_likes, &catalog).is_empty());
}

#[test]
fn results_sorted_by_descending_score_without_zeros() {
    let catalog = create_mixed_catalog();
    let profile = PreferenceProfile::new()
        .with_director("Christopher Nolan")
        .with_actor("Tom Hardy")
        .with_genre("Sci-Fi")
        .with_genre("Drama");

    let names = recommend(&profile, &catalog);

    // Inception 5+3+2=10, Dunkirk 5+3+2=10, Revenant 3+2=5, Mad Max 3+2=5
    assert_eq!(
        names,
        vec!["Inception", "Dunkirk", "The Revenant", "Mad Max: Fury Road"]
    );

    let matcher = PreferenceMatcher::new(&profile);
    let scores: Vec<u32> = names
        .iter()
        .map(|name| score_movie(&matcher, catalog.get_movie(name).unwrap()))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|&s| s > 0));
}

#[test]
fn disliked_and_liked_excluded_case_insensitively() {
    let catalog = create_mixed_catalog();
    let profile = PreferenceProfile::new()
        .with_actor("tom hardy")
        .with_liked("DUNKIRK")
        .with_disliked("inception");

    let names = recommend(&profile, &catalog);

    assert_eq!(names, vec!["The Revenant", "Mad Max: Fury Road"]);
}

#[test]
fn profile_from_input_map() {
    let mut input = HashMap::new();
    input.insert("likedMovies".to_string(), vec!["inception".to_string()]);
    input.insert("actors".to_string(), vec!["Leonardo DiCaprio".to_string()]);
    input.insert("unrelated".to_string(), vec!["ignored".to_string()]);

    let profile = PreferenceProfile::from_map(&input);

    assert_eq!(recommend(&profile, &create_mixed_catalog()), vec!["The Revenant"]);
}

#[test]
fn shared_engine_across_threads() {
    let engine = RecommendationEngine::new(Arc::new(create_mixed_catalog()));

    let handles: Vec<_> = ["Action", "Drama", "Romance"]
        .into_iter()
        .map(|genre| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.recommend(&PreferenceProfile::new().with_genre(genre)))
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], vec!["Inception", "Dunkirk", "Mad Max: Fury Road"]);
    assert_eq!(results[1], vec!["The Revenant", "Dunkirk"]);
    assert_eq!(results[2], vec!["Amélie"]);
}

#[test]
fn sample_data_end_to_end() {
    // Sample files ship in the workspace data/ directory
    let catalog_path = std::path::Path::new("../../data/movies.dat");
    let profile_path = std::path::Path::new("../../data/profile.json");

    if catalog_path.exists() && profile_path.exists() {
        let catalog = Catalog::load_from_file(catalog_path).unwrap();
        let profile = PreferenceProfile::from_json_file(profile_path).unwrap();

        let names = recommend(&profile, &catalog);

        assert_eq!(
            names,
            vec![
                "Dunkirk",
                "Interstellar",
                "The Revenant",
                "The Dark Knight",
                "Mad Max: Fury Road",
                "Blade Runner 2049",
                "Arrival",
                "Dune",
                "Shutter Island",
                "Goodfellas",
            ]
        );
    }
}
