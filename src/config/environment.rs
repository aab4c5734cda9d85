//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno del cliente del portal.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    /// Token de sesión emitido por el colaborador de autenticación;
    /// opcional para poder arrancar sin sesión
    pub session_token: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            api_base_url: env::var("VENDOR_API_BASE_URL")
                .expect("VENDOR_API_BASE_URL must be set"),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .expect("HTTP_TIMEOUT_SECS must be set")
                .parse()
                .expect("HTTP_TIMEOUT_SECS must be a valid number"),
            session_token: env::var("VENDOR_SESSION_TOKEN").ok(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
