//! Catalog building, indexing and validation.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load a catalog from disk.
    ///
    /// Files ending in `.json` are read as JSON, everything else as `.dat`.
    ///
    /// Steps:
    /// 1. Parse the file
    /// 2. Insert movies, rejecting duplicate names and indexing attributes
    /// 3. Validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let movies = if is_json {
            parser::parse_json_file(path)?
        } else {
            parser::parse_dat_file(path)?
        };

        let catalog = Self::from_movies(movies)?;

        let (movies, genres, actors, directors) = catalog.counts();
        info!(
            "Loaded {} movies ({} genres, {} actors, {} directors)",
            movies, genres, actors, directors
        );
        Ok(catalog)
    }

    /// Build a catalog from parsed movies, rejecting duplicate names.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for movie in movies {
            if catalog.contains(&movie.name) {
                return Err(CatalogError::DuplicateMovie { name: movie.name });
            }
            catalog.insert_movie(movie);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Rebuild the attribute index from scratch.
    ///
    /// `insert_movie` keeps the index current, so this is only needed after
    /// bulk edits. A movie listing the same value twice is indexed once.
    pub fn build_secondary_indices(&mut self) {
        self.attribute_index.clear();
        for pos in 0..self.movies.len() {
            self.index_attributes(pos);
        }
        debug!("Built attribute index with {} keys", self.attribute_index.len());
    }

    /// Validate catalog integrity.
    ///
    /// Check that:
    /// - Every movie has a non-blank name
    /// - No genre, actor or director entry is blank
    pub fn validate(&self) -> Result<()> {
        for movie in &self.movies {
            if movie.name.trim().is_empty() {
                return Err(CatalogError::ValidationError(
                    "movie with blank name".to_string(),
                ));
            }
            for dimension in Dimension::ALL {
                if movie.attributes(dimension).iter().any(|v| v.trim().is_empty()) {
                    return Err(CatalogError::ValidationError(format!(
                        "{} has a blank {:?} entry",
                        movie.name, dimension
                    )));
                }
            }
        }
        Ok(())
    }

    /// Case-insensitive title search.
    ///
    /// Exact matches come first, then substring matches; catalog order is
    /// kept within each group.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let query = fold_key(query.trim());
        if query.is_empty() {
            return Vec::new();
        }

        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for movie in &self.movies {
            let name = fold_key(&movie.name);
            if name == query {
                exact.push(movie);
            } else if name.contains(&query) {
                partial.push(movie);
            }
        }
        exact.extend(partial);
        exact
    }
}
