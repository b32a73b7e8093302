// src/specs/mod.rs
//! # Page readers
//!
//! Each module here knows where the data lives in one kind of Last.fm page
//! and how to pull it out with the naive `core::html` helpers.
//!
//! - `tracklist` – the track table of a music page (three layouts).
//! - `scrobbles` – the total scrobble count on a track page.
//!
//! Nothing here sorts, caches or prints; specs only extract.
pub mod scrobbles;
pub mod tracklist;
