//! Modelo de Booking
//! 
//! Las reservas todavía no están integradas con el backend: el dashboard
//! muestra un conjunto fijo en memoria hasta que llegue el módulo de
//! reservas. Sin invariantes; nunca se persisten.

use std::fmt;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Pending,
    Completed,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Active => "Active",
            BookingStatus::Pending => "Pending",
            BookingStatus::Completed => "Completed",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

/// Estilo de badge para mostrar un estado de reserva.
/// `Secondary` es el estilo neutro para estados sin mapeo propio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Warning,
    Success,
    Info,
    Danger,
    Secondary,
}

impl BadgeStyle {
    /// Clase de presentación asociada al estilo
    pub fn class_name(self) -> &'static str {
        match self {
            BadgeStyle::Primary => "bg-primary",
            BadgeStyle::Warning => "bg-warning text-dark",
            BadgeStyle::Success => "bg-success",
            BadgeStyle::Info => "bg-info",
            BadgeStyle::Danger => "bg-danger",
            BadgeStyle::Secondary => "bg-secondary",
        }
    }
}

impl BookingStatus {
    /// Tabla fija estado → estilo de badge
    pub fn badge_style(self) -> BadgeStyle {
        match self {
            BookingStatus::Active => BadgeStyle::Primary,
            BookingStatus::Pending => BadgeStyle::Warning,
            BookingStatus::Completed => BadgeStyle::Success,
            BookingStatus::Confirmed => BadgeStyle::Info,
            BookingStatus::Cancelled => BadgeStyle::Danger,
        }
    }
}

/// Reserva de un cliente sobre un vehículo en un rango de fechas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer: String,
    pub car_name: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: BookingStatus,
    /// Importe total en rupias enteras
    pub amount: i64,
}

impl Booking {
    /// Duración en días naturales por resta de fechas; mismo día = 0.
    /// La buena formación del rango (return >= pickup) se asume del origen
    /// de datos, no se comprueba defensivamente.
    pub fn duration_days(&self) -> i64 {
        self.return_date
            .signed_duration_since(self.pickup_date)
            .num_days()
    }
}

fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

lazy_static! {
    /// Reservas de ejemplo del dashboard hasta integrar el módulo de reservas
    pub static ref RECENT_BOOKINGS: Vec<Booking> = vec![
        Booking {
            id: "BK001".to_string(),
            customer: "Rajesh Kumar".to_string(),
            car_name: "Maruti Swift".to_string(),
            pickup_date: sample_date(2025, 12, 8),
            return_date: sample_date(2025, 12, 10),
            status: BookingStatus::Active,
            amount: 3500,
        },
        Booking {
            id: "BK002".to_string(),
            customer: "Priya Singh".to_string(),
            car_name: "Honda Accord".to_string(),
            pickup_date: sample_date(2025, 12, 9),
            return_date: sample_date(2025, 12, 11),
            status: BookingStatus::Pending,
            amount: 5000,
        },
        Booking {
            id: "BK003".to_string(),
            customer: "Amit Patel".to_string(),
            car_name: "Mahindra XUV500".to_string(),
            pickup_date: sample_date(2025, 12, 6),
            return_date: sample_date(2025, 12, 8),
            status: BookingStatus::Completed,
            amount: 7500,
        },
        Booking {
            id: "BK004".to_string(),
            customer: "Neha Sharma".to_string(),
            car_name: "Tata Nexon".to_string(),
            pickup_date: sample_date(2025, 12, 7),
            return_date: sample_date(2025, 12, 9),
            status: BookingStatus::Completed,
            amount: 4500,
        },
    ];
}
