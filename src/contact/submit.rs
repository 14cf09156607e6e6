use std::rc::Rc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::constants::SUBMIT_SUCCESS_TEXT;
use crate::contact::validation::ContactSubmission;
use crate::error::SubmitError;

/// Delivery of a validated contact request.
///
/// The returned text is shown to the visitor; whether it reads as a
/// success is decided by the form from its content.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError>;
}

/// No network call: waits once, then reports success.
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError> {
        gloo::timers::future::TimeoutFuture::new(self.delay_ms).await;
        info!(email = %submission.email, "envoi simulé du formulaire de contact");
        Ok(SUBMIT_SUCCESS_TEXT.to_string())
    }
}

/// POSTs the submission as JSON. Any 2xx counts as delivered.
pub struct HttpSubmitter {
    pub endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        if response.status().is_success() {
            info!(endpoint = %self.endpoint, "formulaire de contact transmis");
            Ok(SUBMIT_SUCCESS_TEXT.to_string())
        } else {
            let status = response.status().as_u16();
            warn!(endpoint = %self.endpoint, status, "refus du serveur de contact");
            Err(SubmitError::Status(status))
        }
    }
}

pub fn submitter_from_config(config: &SiteConfig) -> Rc<dyn ContactSubmitter> {
    match &config.contact.endpoint {
        Some(endpoint) => Rc::new(HttpSubmitter::new(endpoint.clone())),
        None => Rc::new(SimulatedSubmitter {
            delay_ms: config.contact.simulated_delay_ms,
        }),
    }
}
