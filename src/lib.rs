//! # openstack-metadata
//!
//! Header-level REST bindings for two OpenStack services:
//!
//! - **Glance v1 images** — image details travel as `x-image-meta-*`
//!   response headers, with free-form properties under
//!   `x-image-meta-property-*`.
//! - **Swift v1 accounts** — usage counters as `x-account-*` headers and
//!   user metadata under `x-account-meta-*`.
//!
//! The core is the pair of header parsers in [`parsers`] and their inverse
//! in [`binders`]. The [`api`] clients wire them to HTTP through the
//! [`Transport`](transport::Transport) trait, which callers implement over
//! their HTTP stack of choice.
//!
//! ## Example
//!
//! ```no_run
//! use openstack_metadata::{
//!     api::{AccountApi, ServiceEndpoint},
//!     stub::{StubStore, app},
//!     transport::RouterTransport,
//! };
//!
//! # async fn example() -> Result<(), openstack_metadata::errors::ApiError> {
//! let store = StubStore::new();
//! store.seed("AUTH_demo").await;
//!
//! let transport = RouterTransport::new(app(store));
//! let endpoint = ServiceEndpoint::new("http://localhost:3000/swift/v1/AUTH_demo");
//! let accounts = AccountApi::new(transport, endpoint);
//!
//! let account = accounts.get().await?;
//! println!("{} containers", account.container_count.unwrap_or(0));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod binders;
pub mod date;
pub mod errors;
pub mod headers;
pub mod models;
pub mod parsers;
pub mod stub;
pub mod transport;

pub use date::{ChronoDateService, DateService};
pub use errors::{ApiError, HeaderError};
pub use models::{Account, ImageDetails};
