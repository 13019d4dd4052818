use serde::{Deserialize, Serialize};

// Fields are optional so that a missing email/password surfaces as a 400
// from the handler instead of a deserialization rejection.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequestBody {
    pub email: Option<String>,
    pub password: Option<String>,
}
