//! QuickSell marketplace front-end.
//!
//! A client-side rendered Leptos app over the hosted backend. All domain
//! logic lives in the library crates; this crate is routing, wiring, and
//! rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod session;
