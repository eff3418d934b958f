pub mod canvas;
pub mod colour;
pub mod point;
pub mod polyline;
