//! Singleton dashboard metadata blobs.
//!
//! The data service stores a handful of precomputed artifacts (dataset date
//! range, metric correlation matrix, decade summaries) as JSON blobs keyed by
//! a metadata-type string. The payloads are decoded into typed structs at the
//! point of use.

use crate::error::{Result, ZeitgeistError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The known metadata blob kinds.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKind {
    /// First/last month present in the monthly collection.
    #[display("date_range")]
    #[serde(rename = "date_range")]
    DateRange,
    /// Pairwise correlation matrix of the mood metrics.
    #[display("correlation_matrix")]
    #[serde(rename = "correlation_matrix")]
    CorrelationMatrix,
    /// Per-decade summary rows.
    #[display("decade_summary")]
    #[serde(rename = "decade_summary")]
    DecadeSummary,
}

impl MetadataKind {
    /// The key string used by the service's get-by-key endpoint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DateRange => "date_range",
            Self::CorrelationMatrix => "correlation_matrix",
            Self::DecadeSummary => "decade_summary",
        }
    }
}

impl std::str::FromStr for MetadataKind {
    type Err = ZeitgeistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date_range" => Ok(Self::DateRange),
            "correlation_matrix" => Ok(Self::CorrelationMatrix),
            "decade_summary" => Ok(Self::DecadeSummary),
            other => Err(ZeitgeistError::Metadata(format!(
                "unknown metadata kind: {other}"
            ))),
        }
    }
}

/// A raw metadata blob as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetadata {
    /// Key the blob is stored under.
    pub metadata_type: String,
    /// Uninterpreted payload; decode with the typed accessors.
    #[serde(default)]
    pub payload: Value,
}

impl DashboardMetadata {
    /// Decodes the payload as a correlation matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is not tagged `correlation_matrix` or the
    /// payload does not decode.
    pub fn correlation_matrix(&self) -> Result<CorrelationMatrix> {
        if self.metadata_type != MetadataKind::CorrelationMatrix.as_str() {
            return Err(ZeitgeistError::Metadata(format!(
                "expected correlation_matrix, got {}",
                self.metadata_type
            )));
        }
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Precomputed pairwise correlations between mood metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    /// Metric names, one per row/column.
    pub columns: Vec<String>,
    /// Square matrix aligned with `columns`.
    pub matrix: Vec<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_strings() {
        assert_eq!(MetadataKind::DateRange.as_str(), "date_range");
        assert_eq!(MetadataKind::CorrelationMatrix.to_string(), "correlation_matrix");
        assert_eq!(
            "decade_summary".parse::<MetadataKind>().unwrap(),
            MetadataKind::DecadeSummary
        );
        assert!("moon_phase".parse::<MetadataKind>().is_err());
    }

    #[test]
    fn test_correlation_matrix_decodes() {
        let blob: DashboardMetadata = serde_json::from_value(json!({
            "metadataType": "correlation_matrix",
            "payload": {
                "columns": ["moodMusic", "moodNews"],
                "matrix": [[1.0, 0.31], [0.31, 1.0]]
            }
        }))
        .unwrap();
        let matrix = blob.correlation_matrix().unwrap();
        assert_eq!(matrix.columns.len(), 2);
        assert_eq!(matrix.matrix[0][1], 0.31);
    }

    #[test]
    fn test_wrong_tag_is_an_error() {
        let blob: DashboardMetadata = serde_json::from_value(json!({
            "metadataType": "date_range",
            "payload": {}
        }))
        .unwrap();
        assert!(blob.correlation_matrix().is_err());
    }
}
