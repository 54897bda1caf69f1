//! EmailJS Notification Relay
//!
//! Sends the host an email for every stored booking using an EmailJS
//! template. The template parameters mirror the booking fields.

use std::time::Duration;

use async_trait::async_trait;
use guesthouse_core::{BookingError, BookingRequest, EmailRelay, Result};
use serde::Serialize;

use crate::env;

const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS configuration
#[derive(Clone, Debug)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,

    /// Account public key (sent as `user_id`)
    pub public_key: String,

    /// Private key, required when strict mode is enabled on the account
    pub private_key: Option<String>,

    pub api_url: String,
    pub timeout_secs: u64,
}

impl EmailJsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::process)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            service_id: env::required(&lookup, "EMAILJS_SERVICE_ID")?,
            template_id: env::required(&lookup, "EMAILJS_TEMPLATE_ID")?,
            public_key: env::required(&lookup, "EMAILJS_PUBLIC_KEY")?,
            private_key: lookup("EMAILJS_PRIVATE_KEY"),
            api_url: lookup("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
            timeout_secs: 15,
        })
    }
}

/// Template variables available to the EmailJS template
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: u32,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub message: String,
}

impl From<&BookingRequest> for TemplateParams {
    fn from(request: &BookingRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            guests: request.guests,
            check_in: request.check_in.to_string(),
            check_out: request.check_out.to_string(),
            nights: request.nights(),
            message: request.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams,
}

/// EmailJS REST relay
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    pub fn from_config(config: EmailJsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(EmailJsConfig::from_env()?)
    }

    fn payload(&self, request: &BookingRequest) -> SendRequest<'_> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: TemplateParams::from(request),
        }
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: &BookingRequest) -> Result<()> {
        let response = self
            .client
            .post(&self.config.api_url)
            .json(&self.payload(request))
            .send()
            .await
            .map_err(|e| BookingError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(template = %self.config.template_id, "Booking email sent");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(BookingError::Email(format!("EmailJS returned {status}: {body}")))
        }
    }
}
