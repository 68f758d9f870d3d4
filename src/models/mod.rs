//! Domain records decoded from Glance and Swift response headers.
//!
//! Records are plain immutable values: they are built once per response and
//! serialize naturally as JSON via `serde`.

pub mod account;
pub mod image;

pub use account::Account;
pub use image::{ContainerFormat, DiskFormat, ImageDetails, ImageStatus};
