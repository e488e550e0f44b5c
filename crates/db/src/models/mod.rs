pub mod admin_user;
pub mod content_section;
pub mod message;
pub mod project;
