//! API layer: REST handlers, DTOs and route configuration.

pub mod dto;
pub mod handlers;
pub mod routes;
