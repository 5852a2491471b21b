//! Interview state machine and its conversation content

pub mod engine;
pub mod history;
pub mod opening;
pub mod phase;
pub mod prompts;
pub mod state;
pub mod transcript;

pub use engine::{InterviewEngine, Response};
pub use opening::{plan_opening, Opening, SeedSource};
pub use phase::Phase;
pub use state::InterviewState;
pub use transcript::{Transcript, Turn};
