pub mod find_user_query;
