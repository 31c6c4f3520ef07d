// Intake Collector: the form page, submission and reset.

pub mod handlers;
pub mod session;
pub mod view;
