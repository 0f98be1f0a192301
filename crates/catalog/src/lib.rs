//! # Catalog Crate
//!
//! This crate owns the movie catalog the recommendation engine reads from.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `Dimension` and the ordered `Catalog`
//! - **parser**: Parse `.dat` and `.json` catalog files
//! - **index**: Build secondary indices, validate, search
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Dimension};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.dat"))?;
//!
//! let heat = catalog.get_movie("heat").unwrap();
//! let by_mann = catalog.movies_by(Dimension::Director, "Michael Mann");
//! ```
//!
//! Name lookups and attribute queries ignore case. Iteration always follows
//! the order movies were loaded in.

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{Catalog, Dimension, Movie, fold_key};
