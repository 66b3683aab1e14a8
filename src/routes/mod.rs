use actix_multipart::MultipartError;
use actix_multipart::form::MultipartFormConfig;
use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use log::error;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod client;

pub const MSG_INVALID_REQUEST: &str = "La petición contiene errores.";
pub const MSG_NOT_FOUND: &str = "No se encontro el cliente.";
pub const MSG_QUERY_FAILED: &str = "Se produjo un error al consultar en la base de datos.";
pub const MSG_INSERT_FAILED: &str = "Se produjo un error al insertar en la base de datos.";
pub const MSG_UPDATE_FAILED: &str = "Se produjo un error al editar en la base de datos.";
pub const MSG_DELETE_FAILED: &str = "Se produjo un error al eliminar en la base de datos.";
pub const MSG_UPLOAD_FAILED: &str = "Se produjo un error al subir la imagen.";
pub const MSG_UPLOADED: &str = "Se ha subido correctamente la foto.";
pub const MSG_IMAGE_NOT_FOUND: &str = "No se encontro la imagen.";

/// Registers the client routes and the extractor error handlers.
///
/// `/clientes/paginated` is registered ahead of `/clientes/{id}` so it is not
/// captured by the id pattern.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(MultipartFormConfig::default().error_handler(multipart_error_handler))
        .service(client::list_clients_paginated)
        .service(client::list_clients)
        .service(client::show_client)
        .service(client::create_client)
        .service(client::upload_client_image)
        .service(client::update_client)
        .service(client::delete_client)
        .service(client::show_image);
}

fn bad_request(cause: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::message(MSG_INVALID_REQUEST).with_error(cause))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

fn multipart_error_handler(err: MultipartError, _req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string());
    InternalError::from_response(err, response).into()
}

/// Maps a service failure to its HTTP response.
///
/// `store_message` is the operation specific text used for store failures.
pub fn error_response(err: ServiceError, store_message: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => HttpResponse::BadRequest().json(
            ErrorResponse::message(MSG_INVALID_REQUEST)
                .with_errors(errors.iter().map(ToString::to_string).collect()),
        ),
        ServiceError::TypeConstraint(cause) => bad_request(cause),
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::message(MSG_NOT_FOUND))
        }
        ServiceError::Repository(e) => {
            error!("{store_message} {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::message(store_message).with_error(e.to_string()))
        }
        ServiceError::Storage(e) => {
            error!("{MSG_UPLOAD_FAILED} {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::message(MSG_UPLOAD_FAILED).with_error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    use super::*;
    use crate::forms::FieldError;
    use crate::repository::errors::RepositoryError;

    async fn body_of(response: HttpResponse) -> ErrorResponse {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_errors_become_bad_request() {
        let err = ServiceError::Validation(vec![FieldError::new("email", "no puede estar vacío")]);
        let response = error_response(err, MSG_INSERT_FAILED);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(body.message, MSG_INVALID_REQUEST);
        assert_eq!(
            body.errors,
            Some(vec!["El campo [EMAIL] no puede estar vacío".to_string()])
        );
    }

    #[actix_web::test]
    async fn store_errors_carry_operation_message_and_cause() {
        let err = ServiceError::Repository(RepositoryError::DatabaseError("disk I/O".into()));
        let response = error_response(err, MSG_DELETE_FAILED);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.message, MSG_DELETE_FAILED);
        assert_eq!(body.error.as_deref(), Some("Database error: disk I/O"));
    }

    #[actix_web::test]
    async fn storage_errors_use_upload_message() {
        let err = ServiceError::Storage(std::io::Error::other("read-only"));
        let response = error_response(err, MSG_UPDATE_FAILED);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.message, MSG_UPLOAD_FAILED);
    }

    #[actix_web::test]
    async fn not_found_is_404() {
        let response = error_response(ServiceError::NotFound, MSG_QUERY_FAILED);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.message, MSG_NOT_FOUND);
    }
}
