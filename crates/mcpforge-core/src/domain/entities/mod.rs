pub mod generation_plan;
pub mod manifest;
pub mod template;

pub use crate::domain::DomainError;
pub use generation_plan::{GenerationPlan, PlanEntry};
pub use manifest::GenerationManifest;
pub use template::TemplateId;
