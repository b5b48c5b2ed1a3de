pub mod body_lean;
pub mod bounce;
pub mod geometry;
pub mod ground;
pub mod hip_drop;
pub mod landing;
pub mod sequence;

pub use body_lean::{analyze_body_lean, BodyLeanRecord, LeanCategory};
pub use bounce::BounceTracker;
pub use ground::GroundEstimator;
pub use hip_drop::{analyze_hip_drop, HipDropRecord, HIP_DROP_THRESHOLD};
pub use landing::{classify_landing, LandingRecord, LandingTally, LandingType};
pub use sequence::{SequenceAnalyzer, SequenceReport};
