mod document_repo;
mod memory_repo;

pub use document_repo::*;
pub use memory_repo::*;
