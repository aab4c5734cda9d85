use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{error, info};

use vendor_portal::client::VendorPortalClient;
use vendor_portal::config::environment::EnvironmentConfig;
use vendor_portal::controllers::booking_controller::BookingController;
use vendor_portal::controllers::dashboard_controller::DashboardController;
use vendor_portal::models::user::SessionUser;
use vendor_portal::state::SessionStore;
use vendor_portal::utils::format::{format_inr, format_inr_compact};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Vendor Portal - Cliente del portal de vendedores");
    info!("===================================================");

    let config = EnvironmentConfig::default();
    info!("🌍 Entorno: {}", config.environment);

    let session = SessionStore::new();
    match config.session_token.clone() {
        Some(token) => session.set_session(SessionUser::default(), token).await,
        None => error!("❌ VENDOR_SESSION_TOKEN no está definido; la carga devolverá 401"),
    }

    let api = Arc::new(VendorPortalClient::new(
        config.api_base_url.clone(),
        config.http_timeout_secs,
    )?);

    // Una única carga del dashboard y resumen por consola
    let mut dashboard = DashboardController::new(api, session.clone());
    dashboard.load_vehicles().await;

    if let Some(notice) = dashboard.notice() {
        error!("🚫 {}", notice.message());
        return Ok(());
    }

    let stats = dashboard.stats();
    info!("📊 Total cars: {}", stats.total_cars);
    info!("📊 Available: {}", stats.available_cars);
    info!("📊 Rented: {}", stats.rented_cars);
    info!("📊 Maintenance: {}", stats.maintenance_cars);
    info!(
        "📊 Total value: {} ({})",
        format_inr(stats.total_earnings),
        format_inr_compact(stats.total_earnings)
    );

    let bookings = BookingController::new();
    info!("📒 Reservas recientes (datos de ejemplo):");
    for booking in bookings.bookings() {
        info!(
            "   {} · {} · {} · {} días · {}",
            booking.id,
            booking.customer,
            booking.car_name,
            booking.duration_days(),
            format_inr(Decimal::from(booking.amount))
        );
    }

    Ok(())
}
