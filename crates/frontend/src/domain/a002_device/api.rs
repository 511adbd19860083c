use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::a002_device::aggregate::Device;
use serde_json::Value;

use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::list_view::{CollectionSource, RemoteCollection};

pub const DEVICES_PATH: &str = "/api/devices";

pub fn devices_source(client: ApiClient) -> RemoteCollection<Device> {
    RemoteCollection::new(client, DEVICES_PATH, Device::rows_from_payload)
}

pub fn paired_devices_path(tenant_id: &str) -> String {
    format!("/api/pairing/paired-devices/{}", urlencoding::encode(tenant_id))
}

/// Devices paired under one tenant, flattened to one row per device.
pub struct PairedDevicesSource {
    client: ApiClient,
    tenant_id: String,
}

impl PairedDevicesSource {
    pub fn new(client: ApiClient, tenant_id: impl Into<String>) -> Self {
        Self {
            client,
            tenant_id: tenant_id.into(),
        }
    }
}

#[async_trait(?Send)]
impl CollectionSource<Device> for PairedDevicesSource {
    fn describe(&self) -> String {
        format!("GET {}", paired_devices_path(&self.tenant_id))
    }

    async fn fetch(&self) -> Result<Vec<Device>, ApiError> {
        let payload: Value = self
            .client
            .get_json(&paired_devices_path(&self.tenant_id))
            .await?;
        Ok(Device::paired_rows(&payload, &self.tenant_id, Utc::now()))
    }
}
