//! Foreman LLM - provider dispatch and client construction
//!
//! This crate turns a `(provider, model)` pair into a ready-to-hand-off
//! client handle:
//! - Provider: the three supported vendors and their fixed dispatch tables
//! - Credentials: API key resolution with an injectable source
//! - Factory: credential validation plus model routing
//! - Client: the stateless handle consumed by the crew builder
//!
//! Nothing here performs network I/O. Transport selection happens in the
//! external crew runner, driven by the routed model string this crate
//! produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod credentials;
pub mod error;
pub mod factory;
pub mod provider;
pub mod util;

pub use client::LlmClient;
pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use error::{Error, Result};
pub use factory::LlmFactory;
pub use provider::Provider;
