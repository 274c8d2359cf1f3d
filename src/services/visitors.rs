//! Visitor registration, guest pass delivery and visitor count updates

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{
    clock::DeskTime,
    email::{parse_recipient, MailAttachment, Mailer, OutgoingMail},
    find_visitor, pass, require_identifier, token,
};
use crate::{
    config::FrontDeskConfig,
    error::{AppError, AppResult},
    models::visitor::{
        parse_visit_date, parse_visitors_count, NewVisitor, RegisterVisitor, SendPass, Visitor,
    },
    repository::FrontDeskStore,
};

/// Successful registration: the stored visitor and its QR token
#[derive(Debug, Serialize, ToSchema)]
pub struct Registration {
    pub visitor: Visitor,
    /// PNG QR code of the identifier, base64 encoded
    pub token_png_base64: String,
}

#[derive(Clone)]
pub struct VisitorsService {
    store: Arc<dyn FrontDeskStore>,
    mailer: Arc<dyn Mailer>,
    time: DeskTime,
    organization: FrontDeskConfig,
}

impl VisitorsService {
    pub fn new(
        store: Arc<dyn FrontDeskStore>,
        mailer: Arc<dyn Mailer>,
        time: DeskTime,
        organization: FrontDeskConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            time,
            organization,
        }
    }

    /// Register a visitor and mint its token
    pub async fn register(&self, data: &RegisterVisitor) -> AppResult<Registration> {
        data.validate()
            .map_err(|e| AppError::Validation(format!("Please fill all data: {}", e)))?;

        let new_visitor = NewVisitor {
            identifier: Uuid::new_v4().to_string(),
            name: required("name", &data.name)?,
            surname: required("surname", &data.surname)?,
            company_name: data
                .company_name
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            visitors_count: parse_visitors_count(&data.visitors_count)?,
            host: required("host", &data.host)?,
            visit_date: parse_visit_date(&data.visit_date)?,
            registration_time: self.time.now(),
        };

        let visitor = self.store.create_visitor(&new_visitor).await?;
        let png = token::render_token_png(&visitor.identifier)?;

        tracing::info!(
            identifier = %visitor.identifier,
            visit_date = %visitor.display_visit_date(),
            "Visitor registered"
        );

        Ok(Registration {
            visitor,
            token_png_base64: STANDARD.encode(png),
        })
    }

    pub async fn get(&self, identifier: &str) -> AppResult<Visitor> {
        let identifier = require_identifier(identifier)?;
        find_visitor(self.store.as_ref(), identifier).await
    }

    /// QR code PNG for a registered visitor
    pub async fn token_png(&self, identifier: &str) -> AppResult<Vec<u8>> {
        let visitor = self.get(identifier).await?;
        token::render_token_png(&visitor.identifier)
    }

    /// Render the guest pass and email it. The visitor is read back from the
    /// store, so the pass always matches the identifier it was asked for.
    pub async fn send_pass(&self, identifier: &str, request: &SendPass) -> AppResult<()> {
        request.validate().map_err(|_| {
            AppError::Validation("Please enter a valid email address.".to_string())
        })?;
        parse_recipient(&request.recipient)?;

        let visitor = self.get(identifier).await?;
        let png = token::render_token_png(&visitor.identifier)?;
        let pdf = pass::render_pass(&visitor, &png, &self.organization)?;

        let mail = OutgoingMail {
            to: request.recipient.trim().to_string(),
            subject: format!("Guest pass for {} {}", visitor.name, visitor.surname),
            html_body: self.pass_email_body(),
            attachment: Some(MailAttachment {
                filename: format!("pass_{}.pdf", visitor.surname),
                content_type: "application/pdf".to_string(),
                body: pdf,
            }),
        };

        self.mailer.send(mail).await?;
        tracing::info!(identifier = %visitor.identifier, "Guest pass sent");
        Ok(())
    }

    /// Overwrite the party size of a registered visitor
    pub async fn update_visitors_count(&self, identifier: &str, raw_count: &str) -> AppResult<Visitor> {
        let count = parse_visitors_count(raw_count)
            .map_err(|_| AppError::Validation("Please enter a valid number.".to_string()))?;
        let identifier = require_identifier(identifier)?;

        let visitor = self
            .store
            .update_visitors_count(identifier, count)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found for update".to_string()))?;

        tracing::info!(identifier = %identifier, visitors_count = count, "Visitors count updated");
        Ok(visitor)
    }

    fn pass_email_body(&self) -> String {
        let org = &self.organization;
        let mut body = String::from(
            "<html><body><p>Hello,</p><p>Your guest pass is attached.</p>",
        );
        body.push_str(&format!("<p>{}</p>", html_escape(&org.organization_name)));
        for line in &org.organization_address {
            body.push_str(&format!("<p>{}</p>", html_escape(line)));
        }
        body.push_str(&format!(
            "<p>Opening Hours:</p><p>{}</p>",
            html_escape(&org.opening_hours)
        ));
        body.push_str("<p>Best regards,<br>Visitors Registration system</p></body></html>");
        body
    }
}

fn required(field: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("Please fill all data: {} is empty", field)));
    }
    Ok(value.to_string())
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
