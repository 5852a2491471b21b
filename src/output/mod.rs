//! Output module: resume formatters, exports and interview pacing

pub mod formatter;
pub mod pacing;
pub mod pdf;

pub use formatter::{ExportGenerator, ResumeFormatter};
pub use pacing::ThinkingDelay;
pub use pdf::PdfExporter;
