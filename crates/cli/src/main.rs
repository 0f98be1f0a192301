use anyhow::{anyhow, bail, Context, Result};
use catalog::{Catalog, Dimension, Movie};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{PreferenceProfile, RecommendationEngine};
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// movie-recs - Preference-based movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Rank a movie catalog by liked directors, actors and genres", long_about = None)]
struct Cli {
    /// Path to the movie catalog (.dat or .json)
    #[arg(short, long, default_value = "data/movies.dat")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies for a preference profile
    Recommend {
        #[command(flatten)]
        preferences: PreferenceArgs,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show how each recommendation was scored
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show a movie's genres, actors and directors
    Show {
        /// Exact movie name (case-insensitive)
        #[arg(long)]
        name: String,
    },

    /// Time recommendations for random profiles
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

/// Preference input: a JSON profile file, flags, or both
#[derive(Args)]
struct PreferenceArgs {
    /// JSON profile with likedMovies, dislikedMovies, genres, actors, directors
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Movie already liked (excluded from results, repeatable)
    #[arg(long)]
    liked: Vec<String>,

    /// Movie disliked (excluded from results, repeatable)
    #[arg(long)]
    disliked: Vec<String>,

    /// Preferred genre (repeatable)
    #[arg(long)]
    genre: Vec<String>,

    /// Preferred actor (repeatable)
    #[arg(long)]
    actor: Vec<String>,

    /// Preferred director (repeatable)
    #[arg(long)]
    director: Vec<String>,
}

impl PreferenceArgs {
    fn into_profile(self) -> Result<PreferenceProfile> {
        let base = match &self.profile {
            Some(path) => PreferenceProfile::from_json_file(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?,
            None => PreferenceProfile::default(),
        };

        let flags = PreferenceProfile {
            liked_movies: self.liked.into_iter().collect(),
            disliked_movies: self.disliked.into_iter().collect(),
            genres: self.genre,
            actors: self.actor,
            directors: self.director,
        };

        Ok(base.merge(flags))
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.catalog)
            .with_context(|| format!("Failed to load catalog {}", cli.catalog.display()))?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let engine = RecommendationEngine::new(catalog);

    match cli.command {
        Commands::Recommend {
            preferences,
            limit,
            explain,
        } => handle_recommend(engine.with_limit(limit), preferences, explain)?,
        Commands::Search { title } => handle_search(engine.catalog(), &title),
        Commands::Show { name } => handle_show(engine.catalog(), &name)?,
        Commands::Benchmark { requests } => handle_benchmark(&engine, requests)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: RecommendationEngine,
    preferences: PreferenceArgs,
    explain: bool,
) -> Result<()> {
    let profile = preferences.into_profile()?;
    let names = engine.recommend(&profile);
    info!("Produced {} recommendations", names.len());

    println!("{}", "Movie Recommendations:".bold().blue());
    if names.is_empty() {
        let hint = if profile.has_scoring_preferences() {
            "  (no movie matched your preferences)"
        } else {
            "  (no genre, actor or director preferences given)"
        };
        println!("{}", hint.yellow());
    }
    for (idx, name) in names.iter().enumerate() {
        let rank = (idx + 1).to_string();
        match engine.catalog().get_movie(name) {
            Some(movie) => println!("{}. {} [{}]", rank.green(), movie.name, movie.genres.join(", ")),
            None => println!("{}. {}", rank.green(), name),
        }

        if explain {
            if let Some(breakdown) = engine.explain(&profile, name) {
                println!(
                    "   Score: {} (directors ×{}, actors ×{}, genres ×{})",
                    breakdown.total(),
                    breakdown.director_matches,
                    breakdown.actor_matches,
                    breakdown.genre_matches
                );
            }
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let matches = catalog.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for movie in matches.iter().take(20) {
        println!("  - {} [{}]", movie.name, movie.genres.join(", "));
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, name: &str) -> Result<()> {
    let movie = catalog
        .get_movie(name)
        .ok_or_else(|| anyhow!("Movie '{}' not found", name))?;

    println!("{}", movie.name.bold().blue());
    for (label, dimension) in [
        ("Genres", Dimension::Genre),
        ("Actors", Dimension::Actor),
        ("Directors", Dimension::Director),
    ] {
        let values = movie.attributes(dimension);
        let shown = if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        };
        println!("{}{}: {}", "• ".green(), label, shown);
    }

    for director in &movie.directors {
        let others: Vec<&str> = catalog
            .movies_by(Dimension::Director, director)
            .into_iter()
            .filter(|other| other.name != movie.name)
            .map(|other| other.name.as_str())
            .collect();
        if !others.is_empty() {
            println!("{}More by {}: {}", "• ".green(), director, others.join(", "));
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &RecommendationEngine, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let catalog = engine.catalog();
    if catalog.is_empty() {
        bail!("Catalog is empty; nothing to benchmark");
    }

    let movies: Vec<&Movie> = catalog.movies().collect();
    let directors = attribute_values(catalog, Dimension::Director);
    let actors = attribute_values(catalog, Dimension::Actor);
    let genres = attribute_values(catalog, Dimension::Genre);

    // Random profiles drawn from values that exist in the catalog
    let mut rng = rand::rng();
    let profiles: Vec<PreferenceProfile> = (0..requests)
        .map(|_| {
            let mut profile = PreferenceProfile::new();
            if let Some(movie) = movies.choose(&mut rng) {
                profile = profile.with_liked(movie.name.as_str());
            }
            if let Some(director) = directors.choose(&mut rng) {
                profile = profile.with_director(*director);
            }
            if let Some(actor) = actors.choose(&mut rng) {
                profile = profile.with_actor(*actor);
            }
            if let Some(genre) = genres.choose(&mut rng) {
                profile = profile.with_genre(*genre);
            }
            profile
        })
        .collect();
    debug!("Generated {} benchmark profiles", profiles.len());

    let mut timings: Vec<Duration> = profiles
        .iter()
        .map(|profile| {
            let start = Instant::now();
            let names = engine.recommend(profile);
            std::hint::black_box(names);
            start.elapsed()
        })
        .collect();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32().max(f32::EPSILON);

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Every value of one dimension across the catalog, repeats included
fn attribute_values<'a>(catalog: &'a Catalog, dimension: Dimension) -> Vec<&'a str> {
    catalog
        .movies()
        .flat_map(|m| m.attributes(dimension).iter().map(String::as_str))
        .collect()
}
