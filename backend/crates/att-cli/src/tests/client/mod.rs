mod client;
mod image_file;
