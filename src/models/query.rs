use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A boycott report stored in the `queries` collection.
///
/// Submissions are stored verbatim, so every field beyond the id can be
/// absent: the named ones are those the service itself reads or replaces,
/// anything else the client sent travels in `extra`. `recommendation_count`
/// stays absent until the first counter mutation and is only ever touched
/// through the dedicated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::serialize_object_id_as_hex",
        default
    )]
    pub id: Option<ObjectId>,
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
    /// Owner email.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation_count: Option<i32>,
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn serializes_to_the_wire_shape() {
        let query = Query {
            id: Some(ObjectId::parse_str("65b1f0c2a4d3e8b9c0f1a2b3").unwrap()),
            product_name: Some("Phone X".to_string()),
            product_brand: Some("BrandCo".to_string()),
            query_title: Some("Is there a better alternative?".to_string()),
            boycotting_details: Some("Labor practices".to_string()),
            image_url: Some("https://img.example/p.png".to_string()),
            email: Some("a@x.com".to_string()),
            recommendation_count: None,
            extra: doc! { "userName": "A" },
        };

        let json = serde_json::to_value(&query).expect("Failed to serialize query");
        assert_eq!("65b1f0c2a4d3e8b9c0f1a2b3", json["_id"]);
        assert_eq!("Phone X", json["productName"]);
        assert_eq!("https://img.example/p.png", json["imageURL"]);
        assert_eq!("A", json["userName"]);
        // Counter stays absent until the first recommendation.
        assert!(json.get("recommendationCount").is_none());
    }

    #[test]
    fn deserializes_documents_created_by_the_upsert_path() {
        // Such documents carry only the replaceable field set.
        let document = doc! {
            "_id": ObjectId::new(),
            "productName": "Phone X",
            "productBrand": "BrandCo",
            "queryTitle": "t",
            "boycottingDetails": "d",
            "imageURL": "u",
        };

        let query: Query =
            mongodb::bson::from_document(document).expect("Failed to deserialize query");
        assert_eq!(None, query.email);
        assert_eq!(None, query.recommendation_count);
        assert_eq!(Some("Phone X".to_string()), query.product_name);
    }
}
