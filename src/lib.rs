pub mod configs;
pub mod constants;
pub mod custom_errors;
pub mod data_access_layer;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod service_layer;
pub mod views;
