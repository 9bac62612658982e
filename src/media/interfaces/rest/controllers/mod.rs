pub mod media_rest_controller;
