//! Controlador del dashboard del vendedor
//! 
//! Carga el snapshot de vehículos (un único intento por montaje, sin
//! reintentos) y expone las estadísticas derivadas.

use std::sync::Arc;

use crate::client::VendorApi;
use crate::models::stats::DashboardStats;
use crate::models::vehicle::Vehicle;
use crate::services::stats_service;
use crate::state::SessionStore;
use crate::utils::errors::AppError;

/// Aviso bloqueante del dashboard tras un fallo de autorización.
/// 401 y 403 son los únicos errores del fetch con aviso propio; el resto
/// solo se registra en el log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardNotice {
    /// 403: la sesión no tiene rol de vendedor
    AccessDenied,
    /// 401: la sesión ha expirado
    SessionExpired,
}

impl DashboardNotice {
    /// Texto del aviso que ve el usuario
    pub fn message(self) -> &'static str {
        match self {
            DashboardNotice::AccessDenied => {
                "Access denied. Please log out and log back in as a vendor user."
            }
            DashboardNotice::SessionExpired => "Your session has expired. Please log in again.",
        }
    }
}

/// Controlador de la pantalla de dashboard
pub struct DashboardController {
    api: Arc<dyn VendorApi>,
    session: SessionStore,
    vehicles: Vec<Vehicle>,
    loading: bool,
    notice: Option<DashboardNotice>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn VendorApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            vehicles: Vec::new(),
            loading: true,
            notice: None,
        }
    }

    /// Cargar los vehículos del vendedor.
    /// El flag de carga se limpia en todos los caminos de salida.
    pub async fn load_vehicles(&mut self) {
        self.loading = true;
        let token = self.session.auth_token().await.unwrap_or_default();

        match self.api.get_vendor_vehicles(&token).await {
            Ok(vehicles) => {
                log::info!("🚗 {} vehículos cargados", vehicles.len());
                self.vehicles = vehicles;
            }
            Err(err) => {
                log::error!("❌ Error obteniendo vehículos: {}", err);
                match err {
                    AppError::Forbidden(_) => self.notice = Some(DashboardNotice::AccessDenied),
                    AppError::Unauthorized(_) => {
                        self.notice = Some(DashboardNotice::SessionExpired)
                    }
                    // Sin aviso para el resto de errores, solo log
                    _ => {}
                }
            }
        }

        self.loading = false;
    }

    /// Estadísticas derivadas del snapshot actual
    pub fn stats(&self) -> DashboardStats {
        stats_service::derive_stats(&self.vehicles)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<DashboardNotice> {
        self.notice
    }
}
