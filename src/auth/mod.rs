// Authentication module
// Dual-identity (employer/developer) registration, login, and token-based
// identity resolution

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{
    login_developer_handler, login_employer_handler, me_handler, register_developer_handler,
    register_employer_handler,
};
pub use middleware::AuthenticatedPrincipal;
pub use models::{
    Employee, Employer, LoginRequest, LoginResponse, Principal, PrincipalKind, PrincipalResponse,
    RegisterDeveloperRequest, RegisterEmployerRequest,
};
pub use repository::{EmployeeRepository, EmployerRepository};
pub use service::AuthService;
pub use token::TokenService;
