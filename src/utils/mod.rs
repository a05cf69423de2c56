/// Utility helpers
pub mod template;

pub use template::prepare_target;
