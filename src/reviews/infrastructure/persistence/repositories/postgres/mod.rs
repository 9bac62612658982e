pub mod sqlx_review_record_repository_impl;
