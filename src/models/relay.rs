//! Wire models for the EmailJS send endpoint.

use super::submission::ContactSubmission;
use serde::Serialize;

/// Value sent in place of an empty phone field.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Credentials identifying the relay account, service and template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Variables substituted into the relay's email template.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    /// Build template params from a validated submission.
    pub fn from_submission(submission: &ContactSubmission, to_email: &str) -> Self {
        let phone = if submission.phone.is_empty() {
            PHONE_NOT_PROVIDED.to_string()
        } else {
            submission.phone.clone()
        };

        Self {
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            phone,
            message: submission.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}

/// Request body for `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendEmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// The relay calls the public key `user_id`
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> SendEmailRequest<'a> {
    pub fn new(credentials: &'a RelayCredentials, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
        }
    }
}
