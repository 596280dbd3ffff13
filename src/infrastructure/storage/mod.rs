mod local_filesystem_bucket;
mod path_builder;
mod s3_bucket;

pub use local_filesystem_bucket::LocalFilesystemBucket;
pub use path_builder::{public_url, validate_key, PathBuilder};
pub use s3_bucket::S3Bucket;
