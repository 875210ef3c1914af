//! API routes

pub mod auth;
pub mod badges;
pub mod github;
pub mod health;
pub mod milestones;
pub mod pages;
pub mod repositories;
