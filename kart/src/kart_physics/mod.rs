mod util;
mod types;
mod ground;
mod speed;
mod steering;
mod align;
mod drift;
mod boost;
mod controller;

pub use types::{
    DriftDirection, DriftTier, KartEvent, KartInputs, KartState, KartStepDebug,
};
pub use ground::{FlatGround, GroundHit, GroundSensor};
pub use speed::SpeedRegime;
pub use drift::{DriftSession, DriftStateMachine};
pub use boost::BoostLifecycle;
pub use controller::{FixedStepOutput, KartController};
