pub mod landmark;

pub use landmark::{LandmarkFrame, LandmarkIndex, LandmarkPoint};
