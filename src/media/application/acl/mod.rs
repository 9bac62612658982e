pub mod http_media_storage_facade_impl;
