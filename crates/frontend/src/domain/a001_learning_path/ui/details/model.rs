//! Learning Path Details - Model (API functions)

use crate::shared::api_utils::{get_json, ApiError};
use contracts::domain::a001_learning_path::LearningPath;
use contracts::shared::api::learning_path_path;

/// GET /api/learning-path/:id
pub async fn fetch_by_id(id: &str) -> Result<LearningPath, ApiError> {
    get_json(&learning_path_path(id)).await
}
