// src/specs/mod.rs
//! # Page readers
//!
//! Each module here knows how to read one kind of remote page: where each datum lives
//! in the markup and how to cut it out. It does no networking, no writing and
//! no progress reporting; callers hand it page text and get typed data back.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → scrape::collect_facilities → PageSource::fetch_page
//!                                        → specs::facility::extract
//!                                        → Sheet::append
//! ```
//!
//! ## Conventions
//! - Field selection policy is data (a rule table), not branches, so a layout
//!   change is a one-line edit and is easy to see in review.
//! - Missing data is not an error. Data that is *labelled* but cannot be cut
//!   out at the expected position is.
//! - Readers are tested offline against hand-written page fixtures.
pub mod facility;
