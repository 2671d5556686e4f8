pub mod catalog;
pub mod config;
pub mod cosine;
pub mod error;
pub mod index;
pub mod poster;
pub mod server;
pub mod snapshot;
pub mod stopwords;
pub mod text;
pub mod types;
pub mod vectorize;

pub use catalog::Catalog;
pub use error::EngineError;
pub use index::SimilarityIndex;
pub use types::{Entry, Recommendation};
