mod orientation;
mod rect;
mod rotation;

#[doc(inline)]
pub use orientation::is_rotation_allowed;
#[doc(inline)]
pub use orientation::rotation_priority;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use rotation::OrientedRect;
#[doc(inline)]
pub use rotation::Rotation;
#[doc(inline)]
pub use rotation::oriented_dimensions;
