use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct StatusResponse {
    pub status: String,
    pub environment: String,
    pub timestamp: String,
    pub endpoints: StatusEndpoints,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatusEndpoints {
    pub login: String,
    pub user_data: String,
    pub upload: String,
}
