//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::{
    Ingredient, IngredientId, IngredientName, Recipe, RecipeId, RecipeIngredient,
    RecipeVisibility, User, UserId,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{
    InMemoryIngredientRepository, InMemoryRecipeRepository, InMemoryUserRepository,
};

/// In-memory data set with handles on the seeded identifiers.
///
/// `kitchen` seeds Maria (owning Paella and Tortilla) and Ana (owning
/// Gazpacho). Paella uses 2.0 rice and 0.5 saffron.
pub struct Seed {
    pub maria: UserId,
    pub ana: UserId,
    pub paella: RecipeId,
    pub tortilla: RecipeId,
    pub gazpacho: RecipeId,
    pub rice: IngredientId,
    pub saffron: IngredientId,
    pub state: HttpState,
}

fn ingredient(name: &str) -> Ingredient {
    Ingredient::new(IngredientName::new(name).expect("valid ingredient name"))
}

fn recipe(name: &str, author: &str, lines: &[(IngredientId, f64)]) -> Recipe {
    Recipe {
        id: RecipeId::random(),
        name: name.to_owned(),
        author: author.to_owned(),
        description: format!("{name} by {author}"),
        time: 30,
        ingredients: lines
            .iter()
            .map(|&(ingredient, quantity)| RecipeIngredient {
                ingredient,
                quantity,
            })
            .collect(),
    }
}

impl Seed {
    pub fn empty() -> Self {
        let state = HttpState::from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryRecipeRepository::new()),
            Arc::new(InMemoryIngredientRepository::new()),
            RecipeVisibility::Owned,
        );
        Self {
            maria: UserId::random(),
            ana: UserId::random(),
            paella: RecipeId::random(),
            tortilla: RecipeId::random(),
            gazpacho: RecipeId::random(),
            rice: IngredientId::random(),
            saffron: IngredientId::random(),
            state,
        }
    }

    pub fn kitchen() -> Self {
        let rice = ingredient("Rice");
        let saffron = ingredient("Saffron");
        let eggs = ingredient("Eggs");
        let tomato = ingredient("Tomato");

        let paella = recipe("Paella", "Maria", &[(rice.id, 2.0), (saffron.id, 0.5)]);
        let tortilla = recipe("Tortilla", "Maria", &[(eggs.id, 3.0)]);
        let gazpacho = recipe("Gazpacho", "Ana", &[(tomato.id, 4.0)]);

        let mut maria = User::try_new(UserId::random(), "Maria", "Garcia", "maria@example.com")
            .expect("valid user");
        maria.add_recipe(paella.id);
        maria.add_recipe(tortilla.id);
        let mut ana = User::try_new(UserId::random(), "Ana", "Lopez", "ana@example.com")
            .expect("valid user");
        ana.add_recipe(gazpacho.id);

        let seed_ids = (
            *maria.id(),
            *ana.id(),
            paella.id,
            tortilla.id,
            gazpacho.id,
            rice.id,
            saffron.id,
        );
        let state = HttpState::from_repositories(
            Arc::new(InMemoryUserRepository::with_users([maria, ana])),
            Arc::new(InMemoryRecipeRepository::with_recipes([
                paella, tortilla, gazpacho,
            ])),
            Arc::new(InMemoryIngredientRepository::with_ingredients([
                rice, saffron, eggs, tomato,
            ])),
            RecipeVisibility::Owned,
        );
        let (maria, ana, paella, tortilla, gazpacho, rice, saffron) = seed_ids;
        Self {
            maria,
            ana,
            paella,
            tortilla,
            gazpacho,
            rice,
            saffron,
            state,
        }
    }
}

/// App exposing the full `/api/v1` surface over `seed`.
pub fn seeded_app(
    seed: &Seed,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(seed.state.clone()))
        .service(web::scope("/api/v1").configure(configure_api))
}
