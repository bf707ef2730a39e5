pub mod id;
pub mod preset;
