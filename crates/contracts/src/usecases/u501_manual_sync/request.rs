use serde::{Deserialize, Serialize};

use crate::shared::validation::{require, ValidationError};

/// Kinds of records a manual sync can push from a device to the ERP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDataType {
    Products,
    Transactions,
    Customers,
    Orders,
}

impl SyncDataType {
    pub const ALL: [SyncDataType; 4] = [
        SyncDataType::Products,
        SyncDataType::Transactions,
        SyncDataType::Customers,
        SyncDataType::Orders,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SyncDataType::Products => "Products",
            SyncDataType::Transactions => "Transactions",
            SyncDataType::Customers => "Customers",
            SyncDataType::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMethod {
    #[default]
    Full,
    Delta,
}

impl SyncMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SyncMethod::Full => "Full sync",
            SyncMethod::Delta => "Delta sync",
        }
    }
}

/// Body of `POST /api/mannual_sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualSyncRequest {
    pub device_id: String,
    pub data_types: Vec<SyncDataType>,
    pub sync_method: SyncMethod,
    pub force_erp_resend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ManualSyncRequest {
    pub fn for_device(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            data_types: SyncDataType::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// Adds or removes `data_type`, keeping the canonical order.
    pub fn toggle(&mut self, data_type: SyncDataType) {
        if self.data_types.contains(&data_type) {
            self.data_types.retain(|t| *t != data_type);
        } else {
            self.data_types.push(data_type);
            self.data_types
                .sort_by_key(|t| SyncDataType::ALL.iter().position(|a| a == t));
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Device", &self.device_id)?;
        if self.data_types.is_empty() {
            return Err(ValidationError::NothingSelected("data type"));
        }
        Ok(())
    }
}
