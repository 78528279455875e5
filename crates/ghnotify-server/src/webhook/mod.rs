//! Webhook handlers.

#[cfg(test)]
mod tests;

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use ghnotify_core::format_payload;
use tracing::{info, Span};

use crate::{
    authenticator::authenticate, constants::ACKNOWLEDGED_BODY, metrics::WEBHOOK_EVENTS,
    server::AppContext, Result, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type, channel))]
pub(crate) async fn event_handler(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let request = authenticate(&ctx.config, &req, &body)?;

    let span = Span::current();
    span.record("event_type", request.event_type.to_str());
    span.record("channel", request.channel.as_str());

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ServerError::InvalidJson { source: e })?;
    WEBHOOK_EVENTS.inc();

    let message = format_payload(
        request.event_type,
        request.event_name.as_deref(),
        &payload,
    )?;

    let body = match message {
        Some(message) => {
            ctx.sender.send(&request.channel, &message).await?;
            info!(message = "Message sent");
            message
        }
        None => ACKNOWLEDGED_BODY.to_string(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body))
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
