//! # QuickXPos Admin
//!
//! Client library and console for the QuickXPos point-of-sale licensing
//! platform. Two identity classes (super admin and reseller) share one
//! surface; every screen resolves its data through the role's own backend
//! family and the route guard decides what renders at all.
//!
//! The pieces:
//!
//! - [`auth`]: roles, permission predicates, the route table and guard, and
//!   the persisted session store
//! - [`api`]: the typed HTTP client with envelope unwrapping, error
//!   normalization, forced logout on expiry, and a tag-invalidated query
//!   cache
//! - [`screens`]: role-branching services backing each console screen
//! - [`cli`]: the `qxp-admin` command-line front end
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use quickxpos_admin::api::{ApiClient, NullNavigator};
//! use quickxpos_admin::auth::session::SessionStore;
//! use quickxpos_admin::auth::storage::FileSessionStorage;
//! use quickxpos_admin::config::Settings;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let settings = Settings::from_env()?;
//! let storage = Arc::new(FileSessionStorage::new(settings.session_file.clone()));
//! let session = Arc::new(SessionStore::new(storage));
//! session.hydrate();
//!
//! let client = ApiClient::new(&settings, session.clone(), Arc::new(NullNavigator))?;
//! let outcome = client.login_super_admin("admin@example.com", "secret").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod screens;
pub mod utils;
