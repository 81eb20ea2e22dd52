//! Export service domain logic.
//!
//! Turns the full alumni table into an `.xlsx` workbook held in memory. The
//! REST layer only attaches headers and streams the bytes back.

use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use shared::{AlumniRecord, ALUMNI_FIELDS};

use crate::domain::alumni_service::AlumniService;
use crate::error::Result;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A finished export ready to be sent as a download
#[derive(Debug, Clone)]
pub struct AlumniExport {
    pub filename: String,
    pub content: Vec<u8>,
    pub record_count: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Read every record and render it as a timestamped workbook
    pub async fn export_alumni(&self, alumni_service: &AlumniService) -> Result<AlumniExport> {
        let records = alumni_service.list_alumni().await?;
        let content = self.format(&records)?;
        let filename = export_filename(Local::now().naive_local());

        info!("Rendered {} bytes as {}", content.len(), filename);

        Ok(AlumniExport {
            filename,
            content,
            record_count: records.len(),
        })
    }

    /// Render records as a single-sheet workbook: a bold header row of field
    /// names followed by one row per record, in the order given.
    pub fn format(&self, records: &[AlumniRecord]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();

        for (col, field) in ALUMNI_FIELDS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *field, &header_format)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = index as u32 + 1;

            worksheet.write_string(row, 0, &record.id)?;
            worksheet.write_string(row, 1, &record.name)?;
            worksheet.write_string(row, 2, &record.email)?;
            worksheet.write_number(row, 3, record.graduation_year as f64)?;

            let optional = [
                &record.job_title,
                &record.company,
                &record.linkedin,
                &record.phone,
                &record.address,
            ];
            for (offset, value) in optional.into_iter().enumerate() {
                // Absent values stay as empty cells
                if let Some(text) = value {
                    worksheet.write_string(row, 4 + offset as u16, text)?;
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

/// `alumni_data_<YYYYMMDD_HHMMSS>.xlsx`
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("alumni_data_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}
