//! opsdeck: credential lookup and survey preview for an automation console
//!
//! - [`lookup`]: fetches the first page of credentials of a type through a
//!   [`api::CredentialProvider`], lets the user pick one and auto-selects a
//!   lone match when asked to
//! - [`survey`]: maps survey questions to disabled preview controls
//! - [`app`]: the screen that puts both together
//!
//! State changes go through reducers that return declarative effects; the
//! `opsdeck` binary runs them on `opsdeck_core::EffectRuntime`.

pub mod api;
pub mod app;
pub mod config;
pub mod credential;
pub mod lookup;
pub mod survey;

pub use api::{ApiError, CredentialProvider, HttpCredentials, ListQuery};
pub use config::{Args, ConfigError, ConsoleConfig};
pub use credential::{Credential, CredentialTypeId, Page};
