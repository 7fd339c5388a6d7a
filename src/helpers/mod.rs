pub mod handler_404;
pub mod form_fields;
