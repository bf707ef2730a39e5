pub mod batch;
pub mod preview;
