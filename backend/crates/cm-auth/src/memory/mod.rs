//! In-process implementations of the external service seams.
//!
//! They back the test suites and the demo CLI. Behaviour follows the hosted
//! services closely enough for the gateway's error paths to be exercised.

mod document_store;
mod identity_provider;
mod navigator;

pub use document_store::MemoryDocumentStore;
pub use identity_provider::{DEFAULT_MAX_FAILED_ATTEMPTS, MIN_PASSWORD_LENGTH, MemoryIdentityProvider};
pub use navigator::RecordingNavigator;
