pub mod media_storage_facade;
