//! Backup, export and import wire formats
//!
//! All three are JSON with camelCase keys and ISO-8601 timestamps, matching
//! what the rendering layer reads and writes.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;

/// Placeholder written to exports in place of encrypted content
///
/// Neither the plaintext nor the raw ciphertext leaves the store; an
/// exported blob would hand out offline brute-force material tied to a
/// named area.
pub const REDACTED_CONTENT: &str = "[CONTENIDO ENCRIPTADO]";

/// A full copy of one area's notes, written to durable storage every
/// backup interval
///
/// Each write overwrites the previous snapshot for the area; no history is
/// retained.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupSnapshot {
    pub timestamp: DateTime<Utc>,
    pub area_id: i64,
    pub area_name: String,
    pub notes: Vec<Note>,
}

impl BackupSnapshot {
    /// Storage key under which an area's backup lives
    pub fn key(area_id: i64) -> String {
        format!("areas_backup_{area_id}")
    }
}

/// A sanitized snapshot offered to the user as a downloadable file
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub export_date: DateTime<Utc>,
    pub area_name: String,
    pub notes: Vec<Note>,
}

impl ExportData {
    /// Deterministic filename for an export: the area name with whitespace
    /// collapsed to underscores, plus the export date
    pub fn filename(area_name: &str, date: DateTime<Utc>) -> String {
        let name = area_name.split_whitespace().collect::<Vec<_>>().join("_");

        format!("notas_{name}_{}.json", date.format("%Y-%m-%d"))
    }
}

/// The shape accepted by an import
///
/// A superset of [`ExportData`]: unknown top-level fields are ignored, only
/// `notes` is required.
#[derive(Debug, Deserialize)]
pub struct ImportData {
    pub notes: Vec<Note>,
}
