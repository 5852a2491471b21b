//! Resume interviewer library: a conversational engine that builds a resume
//! from interview answers, optionally seeded from an uploaded PDF

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interview;
pub mod model;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{InterviewError, Result};
