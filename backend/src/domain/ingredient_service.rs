//! Ingredient catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::existence::map_ingredient_error;
use crate::domain::ports::{
    IngredientCatalogueCommand, IngredientCatalogueQuery, IngredientRepository,
};
use crate::domain::{Error, Ingredient, IngredientName};

/// Service implementing the ingredient catalogue driving ports.
#[derive(Clone)]
pub struct IngredientCatalogueService<I> {
    ingredients: Arc<I>,
}

impl<I> IngredientCatalogueService<I> {
    pub fn new(ingredients: Arc<I>) -> Self {
        Self { ingredients }
    }
}

fn duplicate_ingredient(name: &IngredientName) -> Error {
    Error::duplicity(format!("ingredient {name} already exists"))
}

#[async_trait]
impl<I> IngredientCatalogueCommand for IngredientCatalogueService<I>
where
    I: IngredientRepository,
{
    async fn create_ingredient(&self, name: &str) -> Result<Ingredient, Error> {
        let name =
            IngredientName::new(name).map_err(|err| Error::invalid_value(err.to_string()))?;

        if self
            .ingredients
            .find_by_name(&name)
            .await
            .map_err(map_ingredient_error)?
            .is_some()
        {
            return Err(duplicate_ingredient(&name));
        }

        let ingredient = Ingredient::new(name);
        // A concurrent insert of the same name surfaces as `Duplicate`.
        self.ingredients
            .insert(&ingredient)
            .await
            .map_err(map_ingredient_error)?;
        info!(ingredient_id = %ingredient.id, name = %ingredient.name, "ingredient created");
        Ok(ingredient)
    }
}

#[async_trait]
impl<I> IngredientCatalogueQuery for IngredientCatalogueService<I>
where
    I: IngredientRepository,
{
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        self.ingredients.list().await.map_err(map_ingredient_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{IngredientPersistenceError, MockIngredientRepository};
    use crate::domain::{ErrorClass, ErrorCode};
    use crate::outbound::memory::InMemoryIngredientRepository;
    use rstest::rstest;

    fn memory_service() -> IngredientCatalogueService<InMemoryIngredientRepository> {
        IngredientCatalogueService::new(Arc::new(InMemoryIngredientRepository::new()))
    }

    #[rstest]
    #[tokio::test]
    async fn creates_and_lists_ingredients() {
        let service = memory_service();
        let saffron = service.create_ingredient(" saffron ").await.expect("create");
        service.create_ingredient("Garlic").await.expect("create");

        assert_eq!(saffron.name.as_ref(), "saffron");
        let names: Vec<String> = service
            .list_ingredients()
            .await
            .expect("list")
            .into_iter()
            .map(|i| i.name.to_string())
            .collect();
        assert_eq!(names, ["Garlic", "saffron"]);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_names_are_rejected_ignoring_case() {
        let service = memory_service();
        service.create_ingredient("Rice").await.expect("create");

        let err = service.create_ingredient("RICE").await.expect_err("duplicate");
        assert_eq!(err.message(), "ingredient RICE already exists");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.class(), Some(ErrorClass::Duplicity));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn blank_names_are_value_errors(#[case] name: &str) {
        let mut repo = MockIngredientRepository::new();
        repo.expect_find_by_name().never();
        let service = IngredientCatalogueService::new(Arc::new(repo));

        let err = service.create_ingredient(name).await.expect_err("blank");
        assert_eq!(err.class(), Some(ErrorClass::InvalidValue));
        assert_eq!(err.message(), "ingredient name must not be empty");
    }

    #[rstest]
    #[tokio::test]
    async fn racing_insert_reports_duplicity() {
        let mut repo = MockIngredientRepository::new();
        repo.expect_find_by_name().times(1).return_once(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .return_once(|_| Err(IngredientPersistenceError::duplicate("rice")));
        let service = IngredientCatalogueService::new(Arc::new(repo));

        let err = service.create_ingredient("rice").await.expect_err("race");
        assert_eq!(err.class(), Some(ErrorClass::Duplicity));
    }

    #[rstest]
    #[tokio::test]
    async fn list_maps_connection_failures() {
        let mut repo = MockIngredientRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(IngredientPersistenceError::connection("refused")));
        let service = IngredientCatalogueService::new(Arc::new(repo));

        let err = service.list_ingredients().await.expect_err("down");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
