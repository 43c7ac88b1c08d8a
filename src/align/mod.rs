pub mod gate;
pub mod hold;
pub mod score;
pub mod smooth;

pub use gate::{GateState, GateTick, TriggerGate};
pub use hold::HoldTimer;
pub use score::AlignmentScorer;
pub use smooth::ScoreSmoother;
