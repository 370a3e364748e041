use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to check a change-password form before it is sent to the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, max = 30))]
    #[serde(default, alias = "currentPassword")]
    pub current_password: String,
    #[validate(length(min = 8, max = 30))]
    #[serde(default, alias = "newPassword")]
    pub new_password: String,
    #[validate(length(min = 8, max = 30), must_match(other = "new_password"))]
    #[serde(default, alias = "confirmNewPassword")]
    pub confirm_new_password: String,
}
