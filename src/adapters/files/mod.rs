//! File adapters. Implement ContentReader and build UploadedFile values from local paths.

pub mod local;
pub mod memory;

pub use local::{FsContentReader, uploaded_file_from_path};
pub use memory::MemoryReader;
