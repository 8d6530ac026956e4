//! Trait definition for the search API boundary.
//!
//! The pipeline talks to the outside world only through [`SearchGateway`],
//! so the transport can be replaced in tests or by another provider.

use crate::error::GatewayError;
use crate::types::{SearchDepth, SearchResult};

/// A search API backend.
///
/// Implementors issue exactly one outbound request per call to
/// [`search`](SearchGateway::search) and return the results in the order
/// the API produced them. Implementations never retry, cache or
/// deduplicate: identical calls in the same request cycle hit the API twice.
///
/// All implementations must be `Send + Sync` so comparison searches can be
/// driven concurrently.
pub trait SearchGateway: Send + Sync {
    /// Search for `query` at the given `depth`.
    ///
    /// At most [`MAX_RESULTS`](crate::config::MAX_RESULTS) results are requested.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the call fails for any reason: transport
    /// failure, rejected credential, exhausted quota, or a response that does
    /// not match the expected schema.
    fn search(
        &self,
        query: &str,
        depth: SearchDepth,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, GatewayError>> + Send;

    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
}
