//! Admin log entry types

use shared::models::AdminAction;

/// Staff action to be appended to the admin log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogEntry {
    pub admin_user_id: i64,
    pub action: AdminAction,
    pub description: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub ip_address: Option<String>,
}

impl AdminLogEntry {
    pub fn new(admin_user_id: i64, action: AdminAction, description: impl Into<String>) -> Self {
        Self {
            admin_user_id,
            action,
            description: description.into(),
            target_model: None,
            target_id: None,
            ip_address: None,
        }
    }

    pub fn target(mut self, model: &str, id: i64) -> Self {
        self.target_model = Some(model.to_string());
        self.target_id = Some(id);
        self
    }

    pub fn ip(mut self, ip: Option<String>) -> Self {
        self.ip_address = ip;
        self
    }
}
