//! Controladores de pantalla
//! 
//! Un controlador por componente de pantalla. Cada uno posee su propio
//! ciclo de petición y estado local; solo el editor de perfil escribe el
//! estado de sesión compartido.

pub mod account_controller;
pub mod booking_controller;
pub mod dashboard_controller;
pub mod password_controller;
pub mod profile_controller;
