use axum::{
    http::{Method, Uri},
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{Empty, ErrorDto, Metadata},
        audit::{AuditDto, AuditOperation, FieldChange},
        auth::PrincipalDto,
        friendship::{CreateFriendshipDto, FriendshipDto, FriendshipStatus, UpdateFriendshipDto},
        organization::{CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
        vacation::{CreateVacationDto, UpdateVacationDto, VacationDto, VacationStatus},
    },
    server::{
        controller::{audit, auth, friendship, organization, user, vacation},
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Vacation Planner API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::me,
        vacation::get_vacations,
        vacation::get_vacation,
        vacation::create_vacation,
        vacation::update_vacation,
        vacation::delete_vacation,
        organization::get_organizations,
        organization::get_organization,
        organization::create_organization,
        organization::update_organization,
        organization::delete_organization,
        friendship::get_friendships,
        friendship::get_friendship,
        friendship::create_friendship,
        friendship::update_friendship,
        friendship::delete_friendship,
        user::get_users,
        user::get_current_user,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        audit::get_audits,
        audit::get_audit,
        audit::get_entity_audits,
    ),
    components(schemas(
        Empty,
        ErrorDto,
        Metadata,
        PrincipalDto,
        VacationDto,
        VacationStatus,
        CreateVacationDto,
        UpdateVacationDto,
        OrganizationDto,
        CreateOrganizationDto,
        UpdateOrganizationDto,
        FriendshipDto,
        FriendshipStatus,
        CreateFriendshipDto,
        UpdateFriendshipDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        AuditDto,
        AuditOperation,
        FieldChange,
    )),
    tags(
        (name = "auth", description = "OAuth2 login"),
        (name = "vacation", description = "Vacation requests"),
        (name = "organization", description = "Organizations"),
        (name = "friendship", description = "Friendships between subjects"),
        (name = "user", description = "User profiles"),
        (name = "audit", description = "Read-only audit log"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/v1/vacations",
            get(vacation::get_vacations).post(vacation::create_vacation),
        )
        .route(
            "/api/v1/vacations/{id}",
            get(vacation::get_vacation)
                .put(vacation::update_vacation)
                .delete(vacation::delete_vacation),
        )
        .route(
            "/api/v1/organizations",
            get(organization::get_organizations).post(organization::create_organization),
        )
        .route(
            "/api/v1/organizations/{id}",
            get(organization::get_organization)
                .put(organization::update_organization)
                .delete(organization::delete_organization),
        )
        .route(
            "/api/v1/friendships",
            get(friendship::get_friendships).post(friendship::create_friendship),
        )
        .route(
            "/api/v1/friendships/{id}",
            get(friendship::get_friendship)
                .put(friendship::update_friendship)
                .delete(friendship::delete_friendship),
        )
        .route("/api/v1/users", get(user::get_users).post(user::create_user))
        .route("/api/v1/users/me", get(user::get_current_user))
        .route(
            "/api/v1/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/v1/audits", get(audit::get_audits))
        .route("/api/v1/audits/{id}", get(audit::get_audit))
        .route(
            "/api/v1/audits/entity/{entity_id}",
            get(audit::get_entity_audits),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
}

/// Answers requests no route matches with a 404 envelope.
pub(crate) async fn fallback(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {} {}", method, uri))
}
