//! Clients forwarding validated requests to the core server.
//!
//! `ApiClient` owns the HTTP transport; the per-domain clients decide which
//! responses are cacheable and which writes invalidate what.

pub mod api;
pub mod booking;
pub mod item;
pub mod request;
pub mod user;
