pub mod health_controller;
pub mod like_controller;
