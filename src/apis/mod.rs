/// Outbound API clients
///
/// Each upstream provider gets its own submodule built on the shared
/// HttpClient + RateLimiter plumbing in `client`.
pub mod client;
pub mod dexscreener;
pub mod holders;
pub mod llm;
