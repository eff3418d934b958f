pub mod subdivide_polyline;

pub use subdivide_polyline::{subdivide_polyline, subdivide_polyline_n};
