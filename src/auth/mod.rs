//! Authentication for the bunny.net API.
//!
//! Every request carries the account's access key in the `AccessKey`
//! header. The key is held in an [`AccessKey`] and can be rotated on a live
//! client with [`Client::set_api_key`](crate::Client::set_api_key).
//!
//! ```rust
//! use bunnynet::Client;
//!
//! let client = Client::builder().api_key("your-access-key").build()?;
//! client.set_api_key("rotated-access-key");
//! # Ok::<(), bunnynet::Error>(())
//! ```

mod access_key;

pub use access_key::AccessKey;
