pub mod api_errors;
pub mod service_errors;
