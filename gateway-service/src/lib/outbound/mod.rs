pub mod introspection;

pub use introspection::ProviderIntrospector;
