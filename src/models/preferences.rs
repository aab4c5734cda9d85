//! Preferencias de notificación
//! 
//! Estado puramente local de la pantalla de ajustes. Todavía no se
//! transmiten al backend: el guardado de ajustes solo envía campos de
//! perfil.

use serde::{Deserialize, Serialize};

/// Preferencias de notificación del vendedor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub monthly_reports: bool,
    pub auto_approve_bookings: bool,
    pub maintenance_reminders: bool,
    pub document_expiry: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: true,
            push_notifications: true,
            weekly_reports: true,
            monthly_reports: false,
            auto_approve_bookings: false,
            maintenance_reminders: true,
            document_expiry: true,
        }
    }
}

/// Clave de preferencia para el toggle genérico de la pantalla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    EmailNotifications,
    SmsNotifications,
    PushNotifications,
    WeeklyReports,
    MonthlyReports,
    AutoApproveBookings,
    MaintenanceReminders,
    DocumentExpiry,
}

impl NotificationPreferences {
    /// Invertir una preferencia
    pub fn toggle(&mut self, key: PreferenceKey) {
        let flag = self.flag_mut(key);
        *flag = !*flag;
    }

    /// Valor actual de una preferencia
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::EmailNotifications => self.email_notifications,
            PreferenceKey::SmsNotifications => self.sms_notifications,
            PreferenceKey::PushNotifications => self.push_notifications,
            PreferenceKey::WeeklyReports => self.weekly_reports,
            PreferenceKey::MonthlyReports => self.monthly_reports,
            PreferenceKey::AutoApproveBookings => self.auto_approve_bookings,
            PreferenceKey::MaintenanceReminders => self.maintenance_reminders,
            PreferenceKey::DocumentExpiry => self.document_expiry,
        }
    }

    fn flag_mut(&mut self, key: PreferenceKey) -> &mut bool {
        match key {
            PreferenceKey::EmailNotifications => &mut self.email_notifications,
            PreferenceKey::SmsNotifications => &mut self.sms_notifications,
            PreferenceKey::PushNotifications => &mut self.push_notifications,
            PreferenceKey::WeeklyReports => &mut self.weekly_reports,
            PreferenceKey::MonthlyReports => &mut self.monthly_reports,
            PreferenceKey::AutoApproveBookings => &mut self.auto_approve_bookings,
            PreferenceKey::MaintenanceReminders => &mut self.maintenance_reminders,
            PreferenceKey::DocumentExpiry => &mut self.document_expiry,
        }
    }
}
