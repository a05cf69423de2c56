/// Security module - Secure deletion
pub mod shred;

pub use shred::shred_file;
