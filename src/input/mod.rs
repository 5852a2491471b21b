//! Input processing module
//! Handles upload validation, text extraction, cleaning and caching

pub mod cleaner;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
