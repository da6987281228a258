//! Volumes API response types and the reshaped summary.

use serde::{Deserialize, Serialize};

/// ISBN placeholder for volumes without industry identifiers.
pub const NO_ISBN: &str = "N/A";

/// Top-level search response.
///
/// `items` is absent when nothing matched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// One search hit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Bibliographic details of a volume.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

/// An ISBN or other standard identifier.
#[derive(Debug, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub identifier: String,
}

/// A volume reshaped for clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeSummary {
    pub title: String,
    /// All authors joined by `", "`.
    pub author: String,
    /// First industry identifier, or [`NO_ISBN`].
    pub isbn: String,
}

impl From<Volume> for VolumeSummary {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;

        let author = info.authors.unwrap_or_default().join(", ");
        let isbn = info
            .industry_identifiers
            .and_then(|ids| ids.into_iter().next())
            .map_or_else(|| NO_ISBN.to_string(), |id| id.identifier);

        Self {
            title: info.title,
            author,
            isbn,
        }
    }
}

impl VolumesResponse {
    /// Reshape every item, in response order.
    #[must_use]
    pub fn into_summaries(self) -> Vec<VolumeSummary> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(VolumeSummary::from)
            .collect()
    }
}
