pub mod filename;
pub mod upload_dir;
