//! Controllers de la aplicación
//!
//! Lógica de negocio por entidad: validación, chequeos de conflicto
//! y mapeo a DTOs. Los handlers HTTP delegan aquí.

pub mod auth_controller;
pub mod notification_controller;
pub mod route_controller;
pub mod ticket_controller;
pub mod vendor_controller;
