//! HTML component helpers shared by pages.
//!
//! Components are plain functions from data to HTML strings, composed by the
//! page handlers. All user- and provider-supplied text goes through
//! [`layout::escape`] before landing in markup.

pub mod layout;
pub mod media;
