//! Shared fixtures for the HTTP flow tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use cookbook::Trace;
use cookbook::domain::{RecipeVisibility, User, UserId};
use cookbook::inbound::http::configure_api;
use cookbook::inbound::http::state::HttpState;
use cookbook::outbound::memory::{
    InMemoryIngredientRepository, InMemoryRecipeRepository, InMemoryUserRepository,
};

/// Registered cook with an empty collection.
pub fn cook(name: &str, email: &str) -> User {
    User::try_new(UserId::random(), name, "Garcia", email).expect("valid user")
}

pub fn state_for(users: impl IntoIterator<Item = User>, visibility: RecipeVisibility) -> HttpState {
    HttpState::from_repositories(
        Arc::new(InMemoryUserRepository::with_users(users)),
        Arc::new(InMemoryRecipeRepository::new()),
        Arc::new(InMemoryIngredientRepository::new()),
        visibility,
    )
}

pub fn empty_state() -> HttpState {
    state_for(Vec::<User>::new(), RecipeVisibility::Owned)
}

pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
}
