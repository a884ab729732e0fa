//! CLI command implementations

pub mod new;
pub mod resource;

pub use new::NewCommand;
pub use resource::ResourceCommand;
