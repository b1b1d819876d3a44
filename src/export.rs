//! The downloadable Markdown file for a result.

use std::path::{Path, PathBuf};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::FeatureResult;
use crate::render::to_portable_text;

pub const EXPORT_FILE_NAME: &str = "generated-feature.md";
pub const EXPORT_MIME: &str = "text/markdown";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No generated content to download.")]
    NothingToExport,

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// A Markdown file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: String,
}

impl Export {
    pub fn from_result(result: &FeatureResult) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            body: to_portable_text(result),
        }
    }

    /// Export whatever result is current, if any.
    pub fn from_current(current: Option<&FeatureResult>) -> Result<Self, ExportError> {
        current
            .map(Self::from_result)
            .ok_or(ExportError::NothingToExport)
    }

    /// Write the file into `dir`, returning the full path.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.body)?;
        tracing::info!("Saved export to {}", path.display());
        Ok(path)
    }
}

impl IntoResponse for Export {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.mime.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.file_name),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

impl IntoResponse for ExportError {
    fn into_response(self) -> Response {
        match self {
            Self::NothingToExport => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::Io(e) => {
                tracing::error!("Export failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
