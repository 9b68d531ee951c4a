use crate::models;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Inbound payload for recommending a query. Stored verbatim, like query
/// submissions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub queries_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Into<models::Recommendation> for Recommendation {
    fn into(self) -> models::Recommendation {
        let mut recommendation = models::Recommendation::default();
        recommendation.queries_id = self.queries_id;
        recommendation.recommendation_email = self.recommendation_email;
        recommendation.email = self.email;
        recommendation.extra = self.extra;

        recommendation
    }
}
