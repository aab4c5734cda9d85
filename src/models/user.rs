//! Modelo del usuario de sesión
//! 
//! Este módulo contiene el objeto de usuario autenticado tal como lo entrega
//! el colaborador de autenticación. Los campos llegan con nombres duplicados
//! según el endpoint de origen, de ahí las cadenas de fallback.

use serde::{Deserialize, Serialize};

/// Usuario autenticado de la sesión actual
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub phone: Option<String>,
}

impl SessionUser {
    /// Nombre a mostrar: `name`, o `full_name` si el primero falta o está vacío
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.full_name.as_deref()))
    }

    /// Teléfono de contacto: `phone_no`, o `phone` como fallback
    pub fn contact_phone(&self) -> Option<&str> {
        non_empty(self.phone_no.as_deref()).or_else(|| non_empty(self.phone.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
