//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod normalizer;
pub mod test_dependencies;
pub mod traits;
pub mod webhook;

pub use deps::ServerDeps;
pub use normalizer::OpenAIAddressNormalizer;
pub use test_dependencies::{MockAddressNormalizer, MockLeadRelay};
pub use traits::*;
pub use webhook::WebhookLeadRelay;
