//! Turn a directory of markdown posts into RSS 2.0, Atom 1.0 and JSON Feed
//! documents.
//!
//! The build is a single forward pass, see [`pipeline::build_at`].

pub mod collect;
pub mod config;
pub mod discover;
pub mod feed;
pub mod front_matter;
pub mod markdown;
pub mod output;
pub mod pipeline;
pub mod post;
pub mod transformer;
pub mod types;
pub mod utils;
