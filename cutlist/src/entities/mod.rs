mod nesting_result;
mod part;
mod placed_part;
mod sheet;
mod skyline;

#[doc(inline)]
pub use nesting_result::NestingResult;
#[doc(inline)]
pub use part::GrainDirection;
#[doc(inline)]
pub use part::Material;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use skyline::Segment;
#[doc(inline)]
pub use skyline::Skyline;
