pub mod object_storage_repository;
