//! Core domain types for the asset list

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of an asset document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&AssetId> for AssetId {
    fn from(id: &AssetId) -> Self {
        id.clone()
    }
}

/// Marker set on an item when an operation against it failed or is blocked.
///
/// This is data shown next to the row, not a thrown failure. It stays until
/// explicitly cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum ItemError {
    /// The asset is still referenced by other documents and cannot be deleted
    HasReferences,
    /// Any other failure reported by the mutation layer
    Other(String),
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::HasReferences => write!(f, "has references"),
            ItemError::Other(message) => write!(f, "{message}"),
        }
    }
}

/// A single row in the asset browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetItem {
    pub id: AssetId,

    #[serde(default)]
    pub picked: bool,

    /// An async mutation is in flight; the row ignores all interaction
    #[serde(default)]
    pub updating: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ItemError>,
}

impl AssetItem {
    pub fn new(id: impl Into<AssetId>) -> Self {
        Self {
            id: id.into(),
            picked: false,
            updating: false,
            error: None,
        }
    }

    /// Whether clicks on this item should be processed at all
    pub fn is_interactive(&self) -> bool {
        !self.updating
    }
}

/// How an [`AssetSelection`] value should be interpreted by the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKind {
    AssetDocumentId,
}

/// Selection reported to the host document when running in document context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSelection {
    pub kind: SelectionKind,
    pub value: AssetId,
}

impl AssetSelection {
    pub fn asset_document_id(id: impl Into<AssetId>) -> Self {
        Self {
            kind: SelectionKind::AssetDocumentId,
            value: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_idle() {
        let item = AssetItem::new("a");
        assert!(!item.picked);
        assert!(!item.updating);
        assert!(item.error.is_none());
        assert!(item.is_interactive());
    }

    #[test]
    fn test_updating_item_is_not_interactive() {
        let mut item = AssetItem::new("a");
        item.updating = true;
        assert!(!item.is_interactive());
    }

    #[test]
    fn test_item_deserializes_with_defaults() {
        let item: AssetItem = serde_json::from_str(r#"{"id":"img-1"}"#).unwrap();
        assert_eq!(item, AssetItem::new("img-1"));
    }

    #[test]
    fn test_item_error_display() {
        assert_eq!(ItemError::HasReferences.to_string(), "has references");
        assert_eq!(ItemError::Other("boom".into()).to_string(), "boom");
    }

    #[test]
    fn test_asset_selection_serializes_like_host_expects() {
        let selection = AssetSelection::asset_document_id("img-1");
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"kind":"assetDocumentId","value":"img-1"}"#);
    }
}
