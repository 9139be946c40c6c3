//! agent-math: arithmetic and geometry helpers for grid agents.
//!
//! This crate provides component-wise vector operations, normalization of
//! discrete probability distributions (as maps or ordered weight lists), and
//! heading rotation for an agent facing one of the four compass directions.
//!
//! Everything is a pure function over borrowed input, apart from
//! `normalize_map_in_place`, which takes the map by `&mut`.
pub mod config;
pub mod distribution;
pub mod error;
pub mod heading;
pub mod math;

pub use config::NormalizeConfig;
pub use distribution::{normalize_map, normalize_map_in_place, normalize_weights, Distribution};
pub use error::{DistributionError, HeadingError};
pub use heading::{
    turn_heading, turn_heading_in, turn_left, turn_right, Heading, LEFT, ORIENTATIONS, RIGHT,
};
pub use math::{element_wise_product, scalar_vector_product, vector_add};
