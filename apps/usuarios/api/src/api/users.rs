use axum::Router;
use domain_users::{SeaOrmUserRepository, UserService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SeaOrmUserRepository::new(state.db.clone());
    let service = UserService::new(repository);
    handlers::router(service)
}
