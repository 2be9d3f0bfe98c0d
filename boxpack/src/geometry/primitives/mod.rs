mod cuboid;
mod dimensions;
mod position;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use dimensions::Dimensions;
#[doc(inline)]
pub use position::Position;
