//! Services module
//! 
//! Este módulo contiene la lógica de negocio del cliente: derivaciones
//! puras sobre los datos que entrega el API.

pub mod stats_service;

pub use stats_service::*;
