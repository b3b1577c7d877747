// Service module exports

pub mod assignment;
pub mod drag;
pub mod settings;
