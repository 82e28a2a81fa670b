use ra_core::ProfileSubmission;
use ra_shared::email::normalize_email;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /user/register`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email, length(max = 254))]
    pub email: String,
}

impl RegisterRequest {
    /// Trim and lower-case the address before validation
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
        }
    }
}

/// Body of `POST /user/register/progress`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProgressRequest {
    #[validate(email, length(max = 254))]
    pub email: String,
}

impl ProgressRequest {
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
        }
    }
}

/// Body of `POST /user/register/profile/{verify_code}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
}

impl From<ProfileRequest> for ProfileSubmission {
    fn from(request: ProfileRequest) -> Self {
        ProfileSubmission {
            full_name: request.full_name,
            phone: request.phone,
            company: request.company,
            address: request.address,
        }
    }
}
