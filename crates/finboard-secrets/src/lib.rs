//! Credential plumbing for the dashboard.
//!
//! Two jobs, both driven by an [`EnvSource`]:
//!
//! - [`materialize`]: copy a fixed list of credentials into a `.env` file.
//! - [`export`]: dump every credential-looking variable as JSON.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use finboard_secrets::{export, MARKERS};
//!
//! let env = BTreeMap::from([
//!     ("FRED_API_KEY".to_string(), "abc".to_string()),
//!     ("HOME".to_string(), "/root".to_string()),
//! ]);
//! let secrets = export::filter(&env, &MARKERS);
//! assert_eq!(secrets.len(), 1);
//! ```
pub mod env;
pub mod error;
pub mod export;
pub mod materialize;

pub use crate::env::{EnvSource, ProcessEnv};
pub use crate::error::{Result, SecretsError};
pub use crate::export::MARKERS;
pub use crate::materialize::CREDENTIALS;
