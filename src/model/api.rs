use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned by every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
