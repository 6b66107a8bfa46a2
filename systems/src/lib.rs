pub mod hello;
pub mod image_loader;
pub mod masters;
pub mod registry;

pub use hello::HelloSystem;
pub use image_loader::{ImageLoadError, load_file, words_from_bytes};
pub use masters::{CopyMaster, FetchMaster};
