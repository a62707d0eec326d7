//! DTOs de la API
//!
//! Requests y responses serializables que separan el contrato HTTP
//! de los modelos de base de datos.

pub mod auth_dto;
pub mod notification_dto;
pub mod payment_dto;
pub mod route_dto;
pub mod ticket_dto;
pub mod vendor_dto;
