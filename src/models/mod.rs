//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod notification;
pub mod route;
pub mod ticket;
pub mod user;
pub mod vendor;
