use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserPayload {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUserPayload,
    pub token: String,
    pub expires_in: i64,
}
