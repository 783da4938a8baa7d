use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized field data for one CMS item, keyed by the collection's field
/// names. Never contains empty-string or null values; optional fields are
/// omitted instead.
pub type CmsFieldData = Map<String, Value>;

/// Body of the create-item call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest<'a> {
    pub field_data: &'a CmsFieldData,
    pub is_draft: bool,
}

/// A CMS item as returned by the API. Only the identifier is consumed.
#[derive(Debug, Deserialize, Serialize)]
pub struct CmsItem {
    pub id: String,
}

/// Descriptor of one CMS collection of a site.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub display_name: String,
    pub slug: String,
}

/// Descriptor of one site visible to the API credential.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub display_name: String,
    pub short_name: String,
}
