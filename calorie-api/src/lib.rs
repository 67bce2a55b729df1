pub mod error;
pub mod forms;
pub mod handlers;
pub mod pages;
pub mod settings;

use actix_web::web;

use crate::error::ApiError;

/// Register every route. The predictor itself is shared through
/// `web::Data<dyn Predictor>` by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default().error_handler(|err, _| ApiError::Form(err.to_string()).into()),
    )
    .service(handlers::index)
    .service(handlers::predict)
    .service(handlers::recommendation);
}
