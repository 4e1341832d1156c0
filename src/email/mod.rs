// Email notification module
// Fire-and-forget SMTP delivery; a failed send never fails the request
// that triggered it

pub mod handlers;
pub mod models;
pub mod service;

pub use models::{EmployeeEmailRequest, EmployerEmailRequest};
pub use service::{EmailError, EmailService};
