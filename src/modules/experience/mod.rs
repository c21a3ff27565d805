pub mod domain;
pub mod ports;
pub mod repository;
pub mod routes;
