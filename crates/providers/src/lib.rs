pub mod catalog;
pub mod convex;
pub mod material_ui;
pub mod registry;
pub mod schema;
pub mod traits;
pub(crate) mod util;

// Re-exports for convenience.
pub use registry::{builtin, ProviderRegistry, RegistryBuilder, RegistryError};
pub use traits::{Provider, ProviderError};
