pub mod fingerprint;
pub mod pose;
