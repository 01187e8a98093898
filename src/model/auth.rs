use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated caller as seen by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalDto {
    pub subject: String,
    /// Granted scopes without the `SCOPE_` prefix, sorted.
    pub scopes: Vec<String>,
}
