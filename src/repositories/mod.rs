//! Repositorios de acceso a datos
//!
//! Una capa sqlx por tabla. Los controllers nunca tocan SQL directamente.

pub mod notification_repository;
pub mod route_repository;
pub mod ticket_repository;
pub mod user_repository;
pub mod vendor_repository;
