//! Controlador de reservas recientes
//! 
//! El listado es fijo en memoria hasta integrar el módulo de reservas del
//! backend. Soporta seleccionar una reserva para el modal de detalle.

use crate::models::booking::{Booking, RECENT_BOOKINGS};

/// Controlador del listado de reservas recientes del dashboard
pub struct BookingController {
    bookings: Vec<Booking>,
    selected: Option<String>,
}

impl BookingController {
    pub fn new() -> Self {
        Self {
            bookings: RECENT_BOOKINGS.clone(),
            selected: None,
        }
    }

    /// Seleccionar una reserva para el detalle; ids desconocidos se ignoran
    pub fn select_booking(&mut self, id: &str) {
        if self.bookings.iter().any(|b| b.id == id) {
            self.selected = Some(id.to_string());
        }
    }

    /// Cerrar el detalle
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Reserva seleccionada actualmente
    pub fn selected_booking(&self) -> Option<&Booking> {
        self.selected
            .as_deref()
            .and_then(|id| self.bookings.iter().find(|b| b.id == id))
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for BookingController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear_selection() {
        let mut controller = BookingController::new();
        assert!(controller.selected_booking().is_none());

        controller.select_booking("BK002");
        assert_eq!(
            controller.selected_booking().map(|b| b.customer.as_str()),
            Some("Priya Singh")
        );

        controller.clear_selection();
        assert!(controller.selected_booking().is_none());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut controller = BookingController::new();
        controller.select_booking("BK999");
        assert!(controller.selected_booking().is_none());
    }
}
