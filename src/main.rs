use actix_web::{App, HttpServer, web};
use tracing::info;

use modelink::api::{AppStartTime, health_routes, link_routes};
use modelink::config::{get_config, init_config};
use modelink::storage::StorageFactory;
use modelink::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();

    init_config();
    let config = get_config();

    // Guard must stay alive so buffered log lines are flushed on exit
    let _logging_guard = init_logging(&config);

    let storage = StorageFactory::create()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(link_routes())
            .service(health_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
