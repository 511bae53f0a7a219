pub mod registry;

pub use registry::{Entity, Registry};
