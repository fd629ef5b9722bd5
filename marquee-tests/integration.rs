//! Integration tests for Marquee
//!
//! Exercises the catalog facade and the rendered pages together, through the
//! public APIs only: facade operations against providers, stream-URL
//! resolution, and full page renders over the router.

#[path = "integration/facade_flow.rs"]
mod facade_flow;

#[path = "integration/stream_resolution.rs"]
mod stream_resolution;

#[path = "integration/web_pages.rs"]
mod web_pages;
