use actix_files::NamedFile;
use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use log::warn;

use crate::dto::api::{ErrorResponse, MessageResponse};
use crate::dto::client::{ClientsPageQuery, UploadOutcome};
use crate::forms::client::{ClientPayload, UploadImageForm};
use crate::repository::DieselRepository;
use crate::routes::{
    MSG_DELETE_FAILED, MSG_IMAGE_NOT_FOUND, MSG_INSERT_FAILED, MSG_QUERY_FAILED,
    MSG_UPDATE_FAILED, MSG_UPLOADED, error_response,
};
use crate::services::client as client_service;
use crate::uploads::{ImageStore, IncomingImage};

#[get("/clientes")]
pub async fn list_clients(repo: web::Data<DieselRepository>) -> impl Responder {
    match client_service::list_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(err, MSG_QUERY_FAILED),
    }
}

#[get("/clientes/paginated")]
pub async fn list_clients_paginated(
    params: web::Query<ClientsPageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::list_clients_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, MSG_QUERY_FAILED),
    }
}

#[get("/clientes/{id}")]
pub async fn show_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, MSG_QUERY_FAILED),
    }
}

#[post("/clientes")]
pub async fn create_client(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClientPayload>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), &payload) {
        Ok(_) => HttpResponse::Created().finish(),
        Err(err) => error_response(err, MSG_INSERT_FAILED),
    }
}

#[put("/clientes/{id}")]
pub async fn update_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClientPayload>,
) -> impl Responder {
    match client_service::update_client(repo.get_ref(), client_id.into_inner(), &payload) {
        Ok(_) => HttpResponse::Created().finish(),
        Err(err) => error_response(err, MSG_UPDATE_FAILED),
    }
}

#[delete("/clientes/{id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
) -> impl Responder {
    match client_service::delete_client(repo.get_ref(), images.get_ref(), client_id.into_inner())
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, MSG_DELETE_FAILED),
    }
}

#[post("/clientes/upload")]
pub async fn upload_client_image(
    repo: web::Data<DieselRepository>,
    images: web::Data<ImageStore>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
) -> impl Responder {
    let upload = IncomingImage {
        path: form.image.file.path(),
        size: form.image.size,
        file_name: form.image.file_name.as_deref().unwrap_or_default(),
    };

    match client_service::upload_client_image(repo.get_ref(), images.get_ref(), form.id.0, upload)
    {
        Ok(UploadOutcome::Skipped) => HttpResponse::Created().json(MessageResponse::default()),
        Ok(UploadOutcome::Stored(_)) => HttpResponse::Created().json(MessageResponse {
            message: Some(MSG_UPLOADED.to_string()),
        }),
        Err(err) => error_response(err, MSG_UPDATE_FAILED),
    }
}

#[get("/uploads/img/{filename}")]
pub async fn show_image(
    req: HttpRequest,
    filename: web::Path<String>,
    images: web::Data<ImageStore>,
) -> impl Responder {
    match images.resolve(&filename).and_then(NamedFile::open) {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            warn!("Image {filename} not served: {e}");
            HttpResponse::NotFound().json(ErrorResponse::message(MSG_IMAGE_NOT_FOUND))
        }
    }
}
