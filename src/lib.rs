//! Travel groups - travelogue feed
//!
//! Dioxus client for the travel-group feature: a feed of travelogue posts
//! with author identity from the cached member roster and an author-only,
//! confirmation-gated delete.

pub mod logging;

pub mod api_client;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod state;
pub mod storage;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::{ApiClient, TravelogueApi, TravelogueApiHandle};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::{CurrentUser, Member, MemberUser, Travelogue, Visibility};
pub use routes::Route;
pub use state::{DeleteFlow, TravelogueListState};
