pub mod s3_repository_impl;
