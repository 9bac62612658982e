pub mod sqlx_user_record_repository_impl;
