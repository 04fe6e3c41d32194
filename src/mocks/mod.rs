//! Test doubles for the service layer

pub mod mock_service;
