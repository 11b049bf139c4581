//! # base16-fetch
//!
//! Puts scheme definition files on local disk, either from an existing
//! directory or by fetching them:
//!
//! - fan-out: download the scheme registry, then clone every listed
//!   repository with a fixed-size worker pool ([`FetchPool`]);
//! - bulk: clone a single aggregate repository.
//!
//! Entry point: [`Acquirer::acquire`].

pub mod acquire;
pub mod error;
pub mod git;
pub mod pool;
pub mod registry;

pub use acquire::{Acquirer, Acquisition, FetchStrategy, Progress};
pub use error::FetchError;
pub use git::{Fetcher, GitFetcher};
pub use pool::{FetchPool, DEFAULT_WORKERS};
