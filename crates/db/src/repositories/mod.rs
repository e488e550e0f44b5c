pub mod admin_user_repo;
pub mod content_section_repo;
pub mod message_repo;
pub mod project_repo;

pub use admin_user_repo::AdminUserRepo;
pub use content_section_repo::ContentSectionRepo;
pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
