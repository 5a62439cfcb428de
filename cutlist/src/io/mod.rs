mod export;
mod import;

/// External (serializable) representations of part lists and nesting results.
pub mod ext_repr;

/// Rendering of sheets and their parts to SVG.
pub mod svg;

/// Exports a nesting result out of the library.
pub use export::export;

/// Imports a part list into the library.
pub use import::import;
