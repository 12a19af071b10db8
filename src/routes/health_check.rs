use actix_web::HttpResponse;

/// Liveness probe for the load balancer. Always `200 OK`, empty body.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
