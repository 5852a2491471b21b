//! Text heuristics: field extraction, answer quality, and the one-shot resume parse

pub mod field_extractor;
pub mod quality;
pub mod resume_parser;
pub mod skill_matcher;
pub mod text_utils;

pub use quality::QualityClassifier;
pub use resume_parser::{parse_resume_text, ResumeParser};
