#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use parallax_geometry as geometry;

#[doc(inline)]
pub use parallax_tracking as tracking;
