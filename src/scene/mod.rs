pub mod graph;
pub mod node;
pub mod provider;
pub mod rig;
