//! Servicios del sistema
//!
//! Lógica que no es CRUD puro: cálculo de seat maps y el simulador de pagos.

pub mod payment_service;
pub mod seat_service;
