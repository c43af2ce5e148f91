//! Serde types crossing the HTTP boundary.
//!
//! DTOs are the wire representation of the domain: the controllers
//! deserialize request bodies into the `Create*`/`Update*` types and the
//! services hand back the response types. Domain models convert into these
//! at the controller boundary via `into_dto`.

pub mod api;
pub mod booking;
pub mod item;
pub mod request;
pub mod user;
