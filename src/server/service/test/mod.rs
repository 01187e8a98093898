use crate::server::model::auth::Principal;

mod audit;
mod auth;
mod user;
mod vacation;

fn principal(subject: &str, scopes: &[&str]) -> Principal {
    Principal::new(subject, scopes.iter().copied())
}
