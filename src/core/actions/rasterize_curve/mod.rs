pub mod rasterize_curve;

pub use rasterize_curve::rasterize_curve;
