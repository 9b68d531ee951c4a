use crate::models;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Inbound payload for creating a query and for the whole-record replacement
/// path. Submissions are stored verbatim: every field may be absent and
/// fields beyond the known set are kept as-is.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub query_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub boycotting_details: Option<String>,
    #[serde(
        rename = "imageURL",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Into<models::Query> for Query {
    fn into(self) -> models::Query {
        let mut query = models::Query::default();
        query.product_name = self.product_name;
        query.product_brand = self.product_brand;
        query.query_title = self.query_title;
        query.boycotting_details = self.boycotting_details;
        query.image_url = self.image_url;
        query.email = self.email;
        query.extra = self.extra;

        query
    }
}
