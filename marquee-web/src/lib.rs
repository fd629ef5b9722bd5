//! Marquee Web - Server-rendered browsing UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Renders listing, detail, and watch pages over the catalog facade. Every
//! page is a single server-side HTML response; failures from the facade are
//! recovered at the page boundary by rendering a fallback view.

pub mod components;
pub mod error;
pub mod pages;
pub mod server;

// Re-export main types
pub use error::PageError;
pub use server::{AppState, router, run_server};
