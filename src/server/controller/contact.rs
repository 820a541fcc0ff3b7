use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::contact::{ContactDto, CreateContactDto, ReplyContactDto, UpdateContactStatusDto},
    server::{
        data::contact::ContactRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF_ROLES},
        state::AppState,
        util::validate::is_valid_email,
    },
};

/// POST /api/contacts
/// Submit a contact message. Open to unauthenticated visitors.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(dto): Json<CreateContactDto>,
) -> Result<impl IntoResponse, AppError> {
    if dto.name.trim().is_empty() || dto.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name, email and message are required".to_string(),
        ));
    }
    if !is_valid_email(&dto.email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }

    let contact = ContactRepository::new(&state.db)
        .create(dto.name, dto.email, dto.phone, dto.subject, dto.message)
        .await?;

    Ok((StatusCode::CREATED, Json(ContactDto::from_entity(contact))))
}

/// GET /api/contacts
/// All contact messages, newest first (admin/staff).
pub async fn get_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let contacts = ContactRepository::new(&state.db).get_all().await?;

    let dtos: Vec<ContactDto> = contacts.into_iter().map(ContactDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    let contact = ContactRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok((StatusCode::OK, Json(ContactDto::from_entity(contact))))
}

/// POST /api/contacts/{id}/reply
/// Record a reply to a contact message (admin/staff). The reply is persisted
/// with the message; no mail is sent from here.
pub async fn reply_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<ReplyContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.reply.trim().is_empty() {
        return Err(AppError::BadRequest("reply is required".to_string()));
    }

    let contact = ContactRepository::new(&state.db)
        .reply(id, dto.reply)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok((StatusCode::OK, Json(ContactDto::from_entity(contact))))
}

/// PUT /api/contacts/{id}/status
/// Move a contact message through its workflow states (admin/staff).
pub async fn update_contact_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateContactStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.auth)
        .require(&headers, STAFF_ROLES)
        .await?;

    if dto.status.trim().is_empty() {
        return Err(AppError::BadRequest("status is required".to_string()));
    }

    let contact = ContactRepository::new(&state.db)
        .update_status(id, dto.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    Ok((StatusCode::OK, Json(ContactDto::from_entity(contact))))
}
