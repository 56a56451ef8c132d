pub mod controls;
pub mod detail_view;
pub mod form_view;
pub mod page;
pub mod roster_view;
