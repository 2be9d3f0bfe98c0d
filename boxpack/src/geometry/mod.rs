/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod rotation;

#[doc(inline)]
pub use rotation::Rotation;
