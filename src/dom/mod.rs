mod container;
mod document;

pub use container::{Container, ContainerId, Surface};
pub use document::Document;
