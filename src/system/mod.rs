// System Layer
pub mod filesystem;
pub mod opener;

pub use filesystem::{FileSystemProvider, LocalFileSystem};
pub use opener::{ExternalOpener, SystemOpener};
