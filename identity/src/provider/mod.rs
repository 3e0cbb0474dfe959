pub mod client;
pub mod errors;
pub mod types;

pub use client::IdentityClient;
pub use errors::ProviderError;
pub use types::ProviderSession;
pub use types::ProviderUser;
pub use types::SignUpMetadata;
