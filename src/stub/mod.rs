//! In-memory stand-in for a Swift account and a Glance image registry.
//!
//! It speaks the same header conventions the clients parse, which makes it
//! useful both as a local development server (`openstack-stub`) and as an
//! in-process backend for tests.

pub mod handlers;
pub mod routes;
pub mod store;

pub use routes::{app, routes};
pub use store::{StubError, StubStore};
