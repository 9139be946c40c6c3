//! Component-wise vector arithmetic on plain slices.
pub mod vector;

pub use vector::{element_wise_product, scalar_vector_product, vector_add};
