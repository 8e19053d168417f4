//! Report endpoints (manager/admin)

use bytes::Bytes;
use shared::models::{Report, ReportCreate, ReportFormat, ReportSubject};

use crate::{ClientError, ClientResult, HttpClient};

/// Stored reports plus generated export downloads
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl ReportsApi<'_> {
    pub async fn list(&self) -> ClientResult<Vec<Report>> {
        self.http.get("/reports").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Report> {
        self.http.get(&format!("/reports/{id}")).await
    }

    pub async fn create(&self, payload: &ReportCreate) -> ClientResult<Report> {
        self.http.post("/reports", payload).await
    }

    /// Download a generated export, e.g. `/reports/sales/pdf`
    ///
    /// Text exports only exist for customers and inventory.
    pub async fn download(
        &self,
        subject: ReportSubject,
        format: ReportFormat,
    ) -> ClientResult<Bytes> {
        if format == ReportFormat::Text
            && !matches!(subject, ReportSubject::Customers | ReportSubject::Inventory)
        {
            return Err(ClientError::Validation(format!(
                "no text export for {}",
                subject.as_path()
            )));
        }

        self.http
            .get_bytes(&format!(
                "/reports/{}/{}",
                subject.as_path(),
                format.as_path()
            ))
            .await
    }
}
