//! HTTP client for the Praise backend

pub mod client;
pub mod share;

pub use client::{ClientError, ListParams, PraiseClient};
