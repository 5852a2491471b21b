//! Resume data model

pub mod resume;

pub use resume::{
    Certification, ContactInfo, EducationEntry, ExperienceEntry, FieldCounts, Project, ResumeData, PRESENT,
};
