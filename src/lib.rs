pub mod client;
pub mod configuration;
pub mod contact_service;
pub mod domain;
pub mod notifier;
pub mod observability;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
