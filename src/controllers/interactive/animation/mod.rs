pub mod ticker;

pub use ticker::StepTicker;
