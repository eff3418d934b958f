pub mod rasterize_curve;
pub mod subdivide_polyline;
