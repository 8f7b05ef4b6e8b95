// Shared components
pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Domain
pub mod connection;
pub mod event;

// Gateway collaborators
pub mod push;
pub mod store;

// Application layer
pub mod handlers;
pub mod state;
