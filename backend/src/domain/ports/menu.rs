//! Driving ports for weekly meal planning.
//!
//! Days are passed as names (`monday`..`sunday`, any case). An unknown name
//! fails with the value error `<day> is not a valid weekday`.

use async_trait::async_trait;

use crate::domain::{Error, GroceryItem, MenuDay};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuCommand: Send + Sync {
    /// Plan or unplan a visible recipe on `day`; returns `true` when the
    /// recipe is now planned.
    async fn toggle_menu_day(
        &self,
        user_id: &str,
        recipe_id: &str,
        day: &str,
    ) -> Result<bool, Error>;

    /// Clear one day.
    async fn delete_day_menu(&self, user_id: &str, day: &str) -> Result<(), Error>;

    /// Clear the whole week.
    async fn delete_timeline_menu(&self, user_id: &str) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuQuery: Send + Sync {
    async fn retrieve_day(&self, user_id: &str, day: &str) -> Result<MenuDay, Error>;

    /// Planned days, Monday first. Days without recipes are omitted.
    async fn retrieve_menu(&self, user_id: &str) -> Result<Vec<MenuDay>, Error>;

    /// Per-ingredient totals over the planned week.
    ///
    /// # Errors
    /// `menu of user with id <id> is empty` when nothing is planned.
    async fn grocery_list(&self, user_id: &str) -> Result<Vec<GroceryItem>, Error>;
}
