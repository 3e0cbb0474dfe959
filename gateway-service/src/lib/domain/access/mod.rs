pub mod errors;
pub mod models;
pub mod ports;

pub use errors::IntrospectionError;
pub use models::AuthenticatedUser;
pub use ports::TokenIntrospector;
