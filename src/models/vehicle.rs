//! Modelo de Vehicle
//! 
//! Este módulo contiene el snapshot de vehículo tal como lo devuelve el API
//! del portal. El backend es el dueño del ciclo de vida; el cliente solo
//! mantiene una copia transitoria de solo lectura por carga de página.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estado del vehículo - mapea al enum del backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Booked,
    UnderMaintenance,
    /// Estados del backend que este cliente todavía no conoce
    #[serde(other)]
    Unknown,
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Unknown
    }
}

/// Vehicle - registro del API del portal de vendedores
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    /// Tarifa diaria; ausente en el payload equivale a cero
    #[serde(default)]
    pub price_per_day: Decimal,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub seating_capacity: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: VehicleStatus,
}
