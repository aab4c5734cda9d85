//! Vendor Portal - núcleo cliente del portal de vendedores
//!
//! Lógica de cliente para el portal de vendedores de alquiler de coches:
//! controladores por pantalla (dashboard y ajustes), cliente HTTP del API
//! remoto del portal y estado de sesión compartido. La capa de presentación
//! queda fuera: este crate solo gestiona estado y derivación de datos.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod utils;
