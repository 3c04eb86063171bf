mod certification_modal;
mod experience_modal;
mod project_modal;

pub use certification_modal::CertificationModal;
pub use experience_modal::ExperienceModal;
pub use project_modal::ProjectModal;
