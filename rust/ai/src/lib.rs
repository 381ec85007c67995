//! # headsup-ai: Decision Providers for the Heads-Up Engine
//!
//! Implementations of the engine's [`DecisionProvider`] capability:
//!
//! - [`baseline::BaselineProvider`] - deterministic rule-based policy used
//!   for testing, benchmarking and as the fallback of last resort
//! - [`policy::PolicyProvider`] - shell around an opaque learned policy
//! - [`policy::FallbackProvider`] - runs a primary provider under a
//!   deadline and answers from the baseline when it errors, panics or
//!   times out
//!
//! The engine consumes providers through the trait alone and recovers from
//! any provider failure, so a broken or missing model never ends a game.
//!
//! ```rust
//! use headsup_ai::create_provider;
//!
//! let provider = create_provider("baseline");
//! assert_eq!(provider.name(), "baseline");
//! ```

pub use headsup_engine::provider::{DecisionProvider, ProviderError, TableView};

pub mod baseline;
pub mod policy;

/// Creates a provider by name. Currently only `"baseline"` is built in;
/// learned policies are wired up by the caller through
/// [`policy::PolicyProvider`].
///
/// # Panics
///
/// Panics on an unknown provider name.
pub fn create_provider(name: &str) -> Box<dyn DecisionProvider> {
    match name {
        "baseline" => Box::new(baseline::BaselineProvider::new()),
        _ => panic!("Unknown provider: {}", name),
    }
}
