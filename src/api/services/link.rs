use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::api::schema::validate_link_payload;
use crate::errors::ModelinkError;
use crate::storage::{ModelId, SeaOrmStorage};

#[derive(Debug, Deserialize)]
pub struct ResolveLinkQuery {
    pub link: Option<String>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct CreatedLinkData {
    #[serde(rename = "modelID")]
    model_id: ModelId,
    link: String,
}

#[derive(Debug, Serialize)]
struct CreatedLinkBody {
    status: String,
    data: CreatedLinkData,
}

#[derive(Debug, Serialize)]
struct ResolvedLinkBody {
    id: ModelId,
}

pub struct LinkService;

impl LinkService {
    /// POST /api/Link
    ///
    /// The body is taken raw so that a missing `modelID` key and a
    /// `modelID` of the wrong type reject with different statuses.
    pub async fn post_link(
        body: web::Bytes,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let model_id = match validate_link_payload(&body) {
            Ok(id) => id,
            Err(e) => return error_response(&e),
        };

        match storage.insert(&model_id).await {
            Ok(record) => {
                info!("Created link {} for model {}", record.link, record.model_id);
                HttpResponse::Created().json(CreatedLinkBody {
                    status: "success!".to_string(),
                    data: CreatedLinkData {
                        model_id: record.model_id,
                        link: record.link,
                    },
                })
            }
            Err(e) => {
                error!("Failed to create link: {}", e);
                error_response(&e)
            }
        }
    }

    /// GET /api/Link?link=token
    pub async fn get_link(
        query: web::Query<ResolveLinkQuery>,
        storage: web::Data<Arc<SeaOrmStorage>>,
    ) -> impl Responder {
        let token = match query.into_inner().link {
            Some(token) => token,
            None => return error_response(&ModelinkError::missing_field("No link provided")),
        };

        match storage.resolve(&token).await {
            Ok(Some(model_id)) => {
                debug!("Resolved link {}", token);
                HttpResponse::Ok().json(ResolvedLinkBody { id: model_id })
            }
            Ok(None) => {
                debug!("Link not found: {}", token);
                error_response(&ModelinkError::not_found("Link not found"))
            }
            Err(e) => {
                error!("Failed to resolve link {}: {}", token, e);
                error_response(&e)
            }
        }
    }
}

/// 构建错误响应（自动映射 HTTP 状态码）
fn error_response(err: &ModelinkError) -> HttpResponse {
    HttpResponse::build(err.http_status())
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(MessageBody {
            message: err.message().to_string(),
        })
}

/// Link 路由配置
pub fn link_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/Link", web::post().to(LinkService::post_link))
        .route("/Link", web::get().to(LinkService::get_link))
}
