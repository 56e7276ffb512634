pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod image_file;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use image_file::ImageFile;
