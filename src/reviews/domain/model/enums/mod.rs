pub mod reviews_domain_error;
