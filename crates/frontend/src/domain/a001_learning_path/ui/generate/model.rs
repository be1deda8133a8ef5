//! Learning Path Generate - Model (API functions)

use crate::shared::api_utils::{post_json, ApiError};
use contracts::domain::a001_learning_path::{LearningPath, LearningPathRequest};
use contracts::shared::api::GENERATE_PATH;

/// POST /api/generate
pub async fn generate(request: &LearningPathRequest) -> Result<LearningPath, ApiError> {
    post_json(GENERATE_PATH, request).await
}
