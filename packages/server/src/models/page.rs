use chrono::{DateTime, Utc};
use common::HomeView;
use serde::Serialize;

/// A page rendered into its section view-models.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageContentResponse {
    #[schema(example = "home")]
    pub slug: String,
    #[schema(example = "Home")]
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub sections: HomeView,
}
