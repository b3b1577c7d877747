// Module exports for models

pub mod catalog;
pub mod hover;
pub mod instance;
pub mod settings;
pub mod slot;
pub mod template;
