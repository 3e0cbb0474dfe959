pub mod health;
pub mod protected;

pub use health::health;
pub use protected::protected;
