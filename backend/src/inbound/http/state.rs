//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised with mocks or in-memory services.

use std::sync::Arc;

use crate::domain::ports::{
    FavouritesCommand, FavouritesQuery, IngredientCatalogueCommand, IngredientCatalogueQuery,
    IngredientRepository, MenuCommand, MenuQuery, RecipeCatalogueCommand, RecipeCatalogueQuery,
    RecipeRepository, RecipeSearchQuery, UserRepository,
};
use crate::domain::{
    FavouritesService, IngredientCatalogueService, MenuService, RecipeCatalogueService,
    RecipeSearchService, RecipeVisibility,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub search: Arc<dyn RecipeSearchQuery>,
    pub ingredients: Arc<dyn IngredientCatalogueCommand>,
    pub ingredients_query: Arc<dyn IngredientCatalogueQuery>,
    pub recipes: Arc<dyn RecipeCatalogueCommand>,
    pub recipes_query: Arc<dyn RecipeCatalogueQuery>,
    pub favourites: Arc<dyn FavouritesCommand>,
    pub favourites_query: Arc<dyn FavouritesQuery>,
    pub menu: Arc<dyn MenuCommand>,
    pub menu_query: Arc<dyn MenuQuery>,
}

impl HttpState {
    /// Wire every service over one set of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cookbook::domain::RecipeVisibility;
    /// use cookbook::inbound::http::state::HttpState;
    /// use cookbook::outbound::memory::{
    ///     InMemoryIngredientRepository, InMemoryRecipeRepository, InMemoryUserRepository,
    /// };
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(InMemoryRecipeRepository::new()),
    ///     Arc::new(InMemoryIngredientRepository::new()),
    ///     RecipeVisibility::Owned,
    /// );
    /// let _search = state.search.clone();
    /// ```
    pub fn from_repositories<U, R, I>(
        users: Arc<U>,
        recipes: Arc<R>,
        ingredients: Arc<I>,
        visibility: RecipeVisibility,
    ) -> Self
    where
        U: UserRepository + 'static,
        R: RecipeRepository + 'static,
        I: IngredientRepository + 'static,
    {
        let search =
            Arc::new(RecipeSearchService::new(users.clone(), recipes.clone()).with_visibility(visibility));
        let ingredient_catalogue = Arc::new(IngredientCatalogueService::new(ingredients.clone()));
        let recipe_catalogue = Arc::new(
            RecipeCatalogueService::new(users.clone(), recipes.clone(), ingredients.clone())
                .with_visibility(visibility),
        );
        let favourites = Arc::new(FavouritesService::new(users.clone(), recipes.clone()));
        let menu = Arc::new(MenuService::new(users, recipes, ingredients).with_visibility(visibility));

        Self {
            search,
            ingredients: ingredient_catalogue.clone(),
            ingredients_query: ingredient_catalogue,
            recipes: recipe_catalogue.clone(),
            recipes_query: recipe_catalogue,
            favourites: favourites.clone(),
            favourites_query: favourites,
            menu: menu.clone(),
            menu_query: menu,
        }
    }
}
