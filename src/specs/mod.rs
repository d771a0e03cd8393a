// src/specs/mod.rs
//! # Page "specs" module
//!
//! Page-specific knowledge about the membership roster lives here: which
//! parts of a scraped row matter, how to clean them, and how a row turns
//! into a canonical, term-tagged record.
//!
//! ## What lives here
//! - **Row normalization**: display-name qualifier strips, mailto strips,
//!   photo placeholder filtering, group name/slug derivation.
//! - **Term/window tagging** via `core::calendar`.
//!
//! ## What does **not** live here
//! - **Driving the page** (clicking the date control, waiting for the
//!   loader): that is the `scrape::RosterSession` implementor's job.
//! - **Reconciliation and persistence**: `reconcile` and `store` own
//!   those.
//!
//! Specs should be testable offline against captured rows; nothing here
//! touches a live page.
pub mod members;
