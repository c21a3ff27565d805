pub mod notifier;
pub mod ports;
pub mod routes;
