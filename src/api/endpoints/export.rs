//! Data export endpoints (super-admin only). The server streams CSV; the
//! raw bytes are handed back for the caller to write to disk.

use crate::api::client::ApiClient;
use crate::api::error::{ApiError, Result};

/// Resources the platform can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportResource {
    Resellers,
    Salons,
    Licenses,
    ActivityLog,
}

impl ExportResource {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportResource::Resellers => "resellers",
            ExportResource::Salons => "salons",
            ExportResource::Licenses => "licenses",
            ExportResource::ActivityLog => "activity-logs",
        }
    }
}

impl std::str::FromStr for ExportResource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "resellers" => Ok(ExportResource::Resellers),
            "salons" => Ok(ExportResource::Salons),
            "licenses" => Ok(ExportResource::Licenses),
            "activity-logs" => Ok(ExportResource::ActivityLog),
            other => Err(ApiError::Validation(format!(
                "unknown export resource '{other}' (expected resellers, salons, licenses or activity-logs)"
            ))),
        }
    }
}

impl ApiClient {
    /// GET /api/super-admin/export/:resource?format=csv
    pub async fn export_csv(&self, resource: ExportResource) -> Result<Vec<u8>> {
        self.download(
            &format!("/api/super-admin/export/{}", resource.as_str()),
            &[("format".to_string(), "csv".to_string())],
        )
        .await
    }
}
