pub mod page_service;
pub mod roster_service;
