//! One POST route per clan operation.
//!
//! Request bodies carry the operation's positional arguments by name.
//! Responses are the operation's plain result: a JSON boolean, object,
//! array or `null`.

use axum::{extract::Extension, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::common::{AuthError, Caller, ClanId, MemberId};
use crate::domains::clan::actions;
use crate::domains::clan::{Clan, ClanRoster, MembershipType};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub clan_type: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub clan_id: ClanId,
}

#[derive(Debug, Deserialize)]
pub struct SetAdminRequest {
    pub member_id: MemberId,
    pub admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetMemberTypeRequest {
    pub member_id: MemberId,
    #[serde(rename = "type")]
    pub membership_type: MembershipType,
}

#[derive(Debug, Deserialize)]
pub struct SetObjectRequest {
    pub key: String,
    pub value: Value,
}

#[derive(Debug, Deserialize)]
pub struct GetObjectRequest {
    pub key: String,
}

pub async fn create_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<CreateRequest>,
) -> Result<Json<bool>, AuthError> {
    actions::create(&caller, &req.name, &req.clan_type, &state.db_pool)
        .await
        .map(Json)
}

pub async fn join_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<JoinRequest>,
) -> Result<Json<bool>, AuthError> {
    actions::join(&caller, req.clan_id, &state.db_pool)
        .await
        .map(Json)
}

pub async fn leave_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<bool>, AuthError> {
    actions::leave(&caller, &state.db_pool).await.map(Json)
}

pub async fn set_admin_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<SetAdminRequest>,
) -> Result<Json<bool>, AuthError> {
    actions::set_admin(&caller, req.member_id, req.admin, &state.db_pool)
        .await
        .map(Json)
}

pub async fn set_member_type_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<SetMemberTypeRequest>,
) -> Result<Json<bool>, AuthError> {
    actions::set_member_type(&caller, req.member_id, req.membership_type, &state.db_pool)
        .await
        .map(Json)
}

pub async fn set_object_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<SetObjectRequest>,
) -> Result<Json<bool>, AuthError> {
    actions::set_object(&caller, &req.key, &req.value, &state.db_pool)
        .await
        .map(Json)
}

pub async fn get_object_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
    Json(req): Json<GetObjectRequest>,
) -> Result<Json<Option<Value>>, AuthError> {
    actions::get_object(&caller, &req.key, &state.db_pool)
        .await
        .map(Json)
}

pub async fn members_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<Option<ClanRoster>>, AuthError> {
    actions::members(&caller, &state.db_pool).await.map(Json)
}

pub async fn list_handler(
    Extension(state): Extension<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<Vec<Clan>>, AuthError> {
    actions::list(&caller, &state.db_pool).await.map(Json)
}
