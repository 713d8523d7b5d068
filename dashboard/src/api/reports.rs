//! Report export endpoints
//!
//! Exports come back as binary blobs (PDF/XLSX) and are saved locally
//! with the `{report_type}-report-{start}-to-{end}.{ext}` pattern.

use std::path::{Path, PathBuf};

use shared::{export_filename, format_input_date, DateRange};

use crate::error::AppResult;

use super::ApiClient;

/// Client for report exports
#[derive(Clone)]
pub struct ReportsApi {
    client: ApiClient,
}

/// Export file formats offered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Xlsx,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}

impl ReportsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Download an exported report blob
    pub async fn export(
        &self,
        report_type: &str,
        range: &DateRange,
        format: ReportFormat,
    ) -> AppResult<Vec<u8>> {
        let query = vec![
            ("start_date".to_string(), format_input_date(range.start)),
            ("end_date".to_string(), format_input_date(range.end)),
            ("format".to_string(), format.extension().to_string()),
        ];
        self.client
            .get_bytes(&format!("reports/{}/export", report_type), &query)
            .await
    }

    /// Download an export and save it under `export_dir`, returning
    /// the written path
    pub async fn export_to_file(
        &self,
        export_dir: &Path,
        report_type: &str,
        range: &DateRange,
        format: ReportFormat,
    ) -> AppResult<PathBuf> {
        let bytes = self.export(report_type, range, format).await?;

        std::fs::create_dir_all(export_dir)?;
        let path = export_dir.join(export_filename(report_type, range, format.extension()));
        std::fs::write(&path, bytes)?;

        tracing::info!(path = %path.display(), "report export saved");
        Ok(path)
    }
}
