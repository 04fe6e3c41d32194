//! User module
//!
//! This module handles user-related functionality: the HTTP controller, the
//! service it delegates to, and the storage behind it.

pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod user_controller;
