//! CLI command implementations

pub mod configure;
pub mod new;

pub use configure::ConfigureCommand;
pub use new::NewCommand;
