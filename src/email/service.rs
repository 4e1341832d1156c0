// SMTP notification sender

use crate::config::SmtpConfig;
use lettre::{
    message::header::ContentType,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Email sending error
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Invalid email configuration: {0}")]
    InvalidConfig(String),
}

/// SMTP notification sender
///
/// Built once at startup from [`SmtpConfig`]; no connection is opened until
/// the first send.
#[derive(Clone)]
pub struct EmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    /// Create a sender from SMTP configuration
    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailError> {
        let mut builder = if config.use_tls {
            let tls_params = TlsParameters::new(config.host.clone())
                .map_err(|e| EmailError::InvalidConfig(format!("TLS configuration error: {}", e)))?;

            // Port 465 uses implicit TLS (SMTPS), other ports use STARTTLS
            if config.port == 465 {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                    .map_err(|e| EmailError::InvalidConfig(format!("SMTP relay error: {}", e)))?
                    .port(config.port)
                    .tls(Tls::Wrapper(tls_params))
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| EmailError::InvalidConfig(format!("SMTP relay error: {}", e)))?
                    .port(config.port)
                    .tls(Tls::Required(tls_params))
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host).port(config.port)
        };

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: config.from_address.clone(),
        })
    }

    /// Send a plain-text email
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| EmailError::InvalidConfig(format!("Invalid from address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::SendFailed(format!("Invalid to address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| EmailError::SendFailed(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        tracing::info!("Email sent to {}", to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config(port: u16) -> SmtpConfig {
        SmtpConfig {
            host: "localhost".to_string(),
            port,
            username: None,
            password: None,
            use_tls: false,
            from_address: "no-reply@jobboard.local".to_string(),
        }
    }

    #[tokio::test]
    async fn sender_builds_without_tls() {
        assert!(EmailService::from_config(&plain_config(25)).is_ok());
    }

    #[tokio::test]
    async fn sender_builds_with_credentials() {
        let mut config = plain_config(587);
        config.username = Some("user".to_string());
        config.password = Some("pass".to_string());

        assert!(EmailService::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn send_rejects_invalid_recipient() {
        let service = EmailService::from_config(&plain_config(25)).unwrap();

        let result = service.send("not-an-address", "subject", "body").await;
        assert!(matches!(result, Err(EmailError::SendFailed(_))));
    }
}
