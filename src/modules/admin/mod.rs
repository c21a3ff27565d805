pub mod credentials;
pub mod routes;
pub mod session;
