use std::{env, future::Future, time::Duration};

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::contact::{Delivery, DeliveryError, EmailParams};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),
    #[error("Environment variable '{key}' has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Credentials for the EmailJS account that receives contact form messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Needed when the account only accepts non-browser calls with a private key.
    pub private_key: Option<String>,
    pub timeout: Duration,
}

impl EmailJsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let timeout = match lookup("EMAILJS_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: "EMAILJS_TIMEOUT_SECS",
                    value: v,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            service_id: require("EMAILJS_SERVICE_ID")?,
            template_id: require("EMAILJS_TEMPLATE_ID")?,
            public_key: require("EMAILJS_PUBLIC_KEY")?,
            private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|v| !v.trim().is_empty()),
            timeout: Duration::from_secs(timeout),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Forwards contact form messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
    endpoint: String,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, DeliveryError> {
        Self::with_endpoint(config, EMAILJS_SEND_URL)
    }

    pub fn with_endpoint(
        config: EmailJsConfig,
        endpoint: impl Into<String>,
    ) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            config,
            endpoint: endpoint.into(),
        })
    }

    fn request<'a>(&'a self, params: &'a EmailParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
            access_token: self.config.private_key.as_deref(),
        }
    }

    pub async fn send(&self, params: &EmailParams) -> Result<(), DeliveryError> {
        debug!(endpoint = %self.endpoint, "sending contact message");
        let res = self
            .client
            .post(&self.endpoint)
            .json(&self.request(params))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "email service unreachable");
                DeliveryError::Transport(e.to_string())
            })?;

        let status = res.status();
        if status.is_success() {
            info!("contact message delivered");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "email service rejected message");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Server-side entry for a contact submission: re-checks the fields the
/// browser already required, then hands them to the configured client.
pub async fn forward(
    client: Option<&EmailJsClient>,
    params: EmailParams,
) -> Result<(), DeliveryError> {
    if let Some(field) = params.missing_field() {
        return Err(DeliveryError::Incomplete(field));
    }
    let Some(client) = client else {
        error!("contact message dropped: email delivery is not configured");
        return Err(DeliveryError::NotConfigured);
    };
    info!(from = %params.from_email, "forwarding contact message");
    client.send(&params).await
}

impl Delivery for EmailJsClient {
    fn deliver(&self, params: EmailParams) -> impl Future<Output = Result<(), DeliveryError>> {
        async move { self.send(&params).await }
    }
}
