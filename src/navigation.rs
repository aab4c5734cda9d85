//! Colaborador de navegación
//! 
//! La transición de rutas es responsabilidad de la capa de UI; los
//! controladores solo la solicitan a través de este trait.

/// Rutas del portal de vendedores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Punto de entrada tras cerrar sesión
    Login,
    VendorDashboard,
    /// Listado completo de reservas ("View All" / "View Full Details")
    VendorBookings,
}

/// Navegación programática entre rutas del portal
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
}
