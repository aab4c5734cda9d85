//! Servicio de estadísticas del dashboard
//! 
//! Derivación pura, sin I/O: las métricas se recalculan siempre a partir
//! del snapshot de vehículos actual.

use rust_decimal::Decimal;

use crate::models::stats::{BookingMetrics, DashboardStats, AVERAGE_RATING_PLACEHOLDER};
use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Calcular las estadísticas de flota a partir del snapshot de vehículos
pub fn derive_stats(vehicles: &[Vehicle]) -> DashboardStats {
    DashboardStats {
        total_cars: vehicles.len(),
        available_cars: count_by_status(vehicles, VehicleStatus::Available),
        rented_cars: count_by_status(vehicles, VehicleStatus::Booked),
        maintenance_cars: count_by_status(vehicles, VehicleStatus::UnderMaintenance),
        total_earnings: vehicles.iter().map(|v| v.price_per_day).sum::<Decimal>(),
        average_rating: AVERAGE_RATING_PLACEHOLDER,
        booking_metrics: BookingMetrics::NotIntegrated,
    }
}

fn count_by_status(vehicles: &[Vehicle], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(status: VehicleStatus, price: i64) -> Vehicle {
        Vehicle {
            status,
            price_per_day: Decimal::from(price),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_fleet_yields_all_zero_stats() {
        let stats = derive_stats(&[]);
        assert_eq!(stats.total_cars, 0);
        assert_eq!(stats.available_cars, 0);
        assert_eq!(stats.rented_cars, 0);
        assert_eq!(stats.maintenance_cars, 0);
        assert_eq!(stats.total_earnings, Decimal::ZERO);
        assert_eq!(stats.booking_metrics, BookingMetrics::NotIntegrated);
    }

    #[test]
    fn test_counters_match_status_filters() {
        let vehicles = vec![
            vehicle(VehicleStatus::Available, 1000),
            vehicle(VehicleStatus::Booked, 2000),
        ];

        let stats = derive_stats(&vehicles);

        assert_eq!(stats.total_cars, 2);
        assert_eq!(stats.available_cars, 1);
        assert_eq!(stats.rented_cars, 1);
        assert_eq!(stats.maintenance_cars, 0);
        assert_eq!(stats.total_earnings, Decimal::from(3000));
    }

    #[test]
    fn test_unknown_status_counts_only_in_total() {
        let vehicles = vec![
            vehicle(VehicleStatus::Available, 500),
            vehicle(VehicleStatus::Unknown, 800),
            vehicle(VehicleStatus::UnderMaintenance, 700),
        ];

        let stats = derive_stats(&vehicles);

        assert_eq!(stats.total_cars, 3);
        assert_eq!(stats.available_cars, 1);
        assert_eq!(stats.maintenance_cars, 1);
        assert_eq!(stats.rented_cars, 0);
        assert_eq!(stats.total_earnings, Decimal::from(2000));
    }

    #[test]
    fn test_monthly_average_over_fixed_window() {
        let vehicles = vec![vehicle(VehicleStatus::Available, 6000)];
        let stats = derive_stats(&vehicles);
        assert_eq!(stats.monthly_average(), Decimal::from(1000));
    }
}
