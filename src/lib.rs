//! Client for GitHub's REST API
//! https://docs.github.com/rest
//!
//! Requests are built from route templates and loosely typed [`Params`]; responses are returned
//! raw, whatever their status.
//!
//! ```no_run
//! use github_rest::{GitHub, Params};
//!
//! # async fn run() -> github_rest::client::Result<()> {
//! let github = GitHub::new("ghp_token")?;
//!
//! let response = github
//!     .issues()
//!     .list_for_repo("rust-lang", "rust", Params::new().set("state", "open").null("labels"))
//!     .await?;
//!
//! if response.is_success() {
//!     println!("{}", response.text()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{Client, ClientBuilder, GitHub, Params, Response, Verb};
