//! Dashboard core for Roster.
//!
//! Fetches the user collection from a remote HTTP resource, keeps it in a
//! canonical in-memory store, derives the searched/filtered/sorted/paged
//! view, and synchronizes create/update/delete edits back to the server
//! under confirm-then-mutate semantics: the store is only touched after the
//! remote call has succeeded.

pub mod api_client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod service;
pub mod state;
pub mod store;
pub mod testing;
pub mod view;

pub use api_client::ApiClient;
pub use config::{ClientConfig, ConfigLoadError};
pub use dashboard::Dashboard;
pub use errors::{ApiError, DashboardError};
pub use service::{UserDirectoryApiAdapter, UserDirectoryService};
pub use state::{Action, DashboardState, SubmitRequest};
pub use store::UserStore;
pub use view::{derive_view, FilterState, PageView};
