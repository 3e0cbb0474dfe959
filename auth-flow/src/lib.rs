//! Client-side authentication flow
//!
//! The state machine behind a login/signup surface. It owns the raw form
//! fields, toggles between the two views, runs the local password checks,
//! and drives submissions against a remote identity provider injected
//! through the [`AuthProvider`] port.
//!
//! Rendering is out of scope. A frontend binds to the [`AuthFlow`] getters
//! for its state and calls the operations from its event loop; concurrent
//! events during an in-flight submission are safe and resolve
//! deterministically.

pub mod errors;
pub mod models;
pub mod ports;
pub mod provider;
pub mod service;

pub use errors::AuthProviderError;
pub use models::FormFields;
pub use models::RequestStatus;
pub use models::ViewState;
pub use ports::AuthProvider;
pub use provider::ProviderAuth;
pub use service::AuthFlow;
