use std::future::Future;

use crate::domain::{
    chat::{entities::MealDaySuggestions, value_objects::SuggestMealsForDayInput},
    common::{entities::app_errors::CoreError, value_objects::AccessToken},
};

/// Service trait for chat-based day meal planning.
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanChatService: Send + Sync {
    fn suggest_meals_for_day(
        &self,
        access_token: AccessToken,
        input: SuggestMealsForDayInput,
    ) -> impl Future<Output = Result<MealDaySuggestions, CoreError>> + Send;
}
