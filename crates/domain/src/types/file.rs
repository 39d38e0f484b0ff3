//! Generated spreadsheet/chart types

use serde::{Deserialize, Serialize};

use super::{id_format, null_as_default};
use crate::constants::{DOWNLOAD_FILE_EXTENSION, DOWNLOAD_FILE_PREFIX};
use crate::impl_wire_str_conversions;

/// File produced by the backend's spreadsheet generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    #[serde(deserialize_with = "id_format::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub file_type: FileKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub preview_data: Option<PreviewData>,
}

impl GeneratedFile {
    /// Name the downloaded bytes are saved under.
    pub fn download_name(id: &str) -> String {
        format!("{DOWNLOAD_FILE_PREFIX}{id}.{DOWNLOAD_FILE_EXTENSION}")
    }
}

/// Sheet or chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    #[default]
    #[serde(rename = "excel", alias = "sheet")]
    Sheet,
    #[serde(rename = "chart")]
    Chart,
}

impl_wire_str_conversions!(FileKind {
    Sheet => "excel",
    Chart => "chart",
});

/// Dimensions of the generated table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewData {
    #[serde(default)]
    pub rows: u64,
    #[serde(default)]
    pub columns: u64,
}

/// Body of `POST /excel/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRequest {
    pub request_text: String,
    pub data: Option<serde_json::Value>,
}
