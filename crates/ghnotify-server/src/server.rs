//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use ghnotify_chat_interface::MessageSender;
use ghnotify_config::Config;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    chat::MetricsMessageSender,
    health::health_check_route,
    metrics::build_metrics_handler,
    webhook::{configure_webhook_handlers, event_handler},
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Chat message sender.
    pub sender: Box<dyn MessageSender>,
}

impl AppContext {
    /// Create new app context, counting sent messages.
    pub fn new(config: Config, sender: Box<dyn MessageSender>) -> Self {
        Self {
            config,
            sender: Box::new(MetricsMessageSender::new(sender)),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let max_payload_size = context.config.server.max_payload_size;

    App::new()
        .app_data(context)
        .app_data(web::PayloadConfig::new(max_payload_size))
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(web::scope("/webhook").configure(configure_webhook_handlers))
        .route("/health", web::get().to(health_check_route))
        .service(
            web::resource("/")
                .route(web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on ghnotify!" }))
                }))
                .route(web::post().to(event_handler)),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let workers_count = context.config.server.workers_count;
    let context = Data::new(context);
    let prometheus = build_metrics_handler()?;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
