//! HTTP service handlers.
//!
//! This module contains the axum handlers mounted by [`crate::create_router`].

pub mod convert_service;
pub mod health_service;
