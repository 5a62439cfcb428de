/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::NestingConfig;
#[doc(inline)]
pub use config::SheetSize;
#[doc(inline)]
pub use config::SortStrategy;
#[doc(inline)]
pub use fpa::FPA;
