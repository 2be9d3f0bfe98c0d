/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can determine whether `T` lies entirely within `Self`.
///
/// Touching the boundary of `Self` counts as enclosed.
pub trait Encloses<T> {
    fn encloses(&self, other: &T) -> bool;
}
