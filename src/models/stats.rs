//! Métricas derivadas del dashboard
//! 
//! Este módulo contiene los tipos de estadísticas de flota. Los campos
//! derivados se calculan siempre a partir del snapshot de vehículos actual
//! y nunca se mutan de forma independiente.

use rust_decimal::Decimal;

/// Valoración media provisional hasta que exista el módulo de reseñas
pub const AVERAGE_RATING_PLACEHOLDER: f64 = 4.8;

/// Indicadores de rendimiento provisionales de la tarjeta Performance
pub mod performance {
    pub const RESPONSE_TIME_HOURS: f64 = 2.5;
    pub const CANCELLATION_RATE_PCT: u8 = 2;
    pub const TOTAL_REVIEWS: u32 = 34;
}

/// Métricas derivadas de reservas
///
/// El módulo de reservas todavía no está integrado. La variante
/// `NotIntegrated` distingue "cero reservas" de "fuente de reservas no
/// disponible"; los accesores devuelven cero para la presentación.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingMetrics {
    /// La fuente de reservas no está disponible todavía
    NotIntegrated,
    /// Métricas reales una vez integrado el módulo de reservas
    Integrated {
        active_bookings: u32,
        completed_bookings: u32,
        monthly_earnings: Decimal,
    },
}

impl BookingMetrics {
    pub fn is_integrated(&self) -> bool {
        matches!(self, BookingMetrics::Integrated { .. })
    }

    pub fn active_bookings(&self) -> u32 {
        match self {
            BookingMetrics::NotIntegrated => 0,
            BookingMetrics::Integrated {
                active_bookings, ..
            } => *active_bookings,
        }
    }

    pub fn completed_bookings(&self) -> u32 {
        match self {
            BookingMetrics::NotIntegrated => 0,
            BookingMetrics::Integrated {
                completed_bookings, ..
            } => *completed_bookings,
        }
    }

    pub fn monthly_earnings(&self) -> Decimal {
        match self {
            BookingMetrics::NotIntegrated => Decimal::ZERO,
            BookingMetrics::Integrated {
                monthly_earnings, ..
            } => *monthly_earnings,
        }
    }
}

/// Estadísticas de flota del dashboard del vendedor
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_cars: usize,
    pub available_cars: usize,
    pub rented_cars: usize,
    pub maintenance_cars: usize,
    /// Suma de tarifas diarias; se muestra como "valor total", no son
    /// ingresos reales
    pub total_earnings: Decimal,
    pub average_rating: f64,
    pub booking_metrics: BookingMetrics,
}

impl DashboardStats {
    /// Media mensual de la vista de ingresos (ventana fija de seis meses)
    pub fn monthly_average(&self) -> Decimal {
        self.total_earnings / Decimal::from(6)
    }
}
