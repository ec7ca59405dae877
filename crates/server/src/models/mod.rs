//! Domain models bound to database rows.

pub mod project_section;
pub mod section;
pub mod user;
pub mod website;

pub use project_section::{ProjectSection, ProjectSectionDetail};
pub use section::{SectionCategory, SectionTemplate, SectionTemplateWithVariants, SectionVariant};
pub use user::User;
pub use website::Website;
