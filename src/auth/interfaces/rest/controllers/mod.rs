pub mod auth_rest_controller;
