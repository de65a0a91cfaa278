#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared wire models for the Gatehouse client.
//!
//! Everything the backend sends or receives over `/api/users/*` is modeled
//! here, so the web crate and any future tooling agree on the JSON shapes.

pub mod models;
