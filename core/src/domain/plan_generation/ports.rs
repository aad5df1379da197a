use std::future::Future;

use crate::domain::{
    common::{entities::app_errors::CoreError, value_objects::AccessToken},
    plan_generation::{entities::WeeklyPlanResult, value_objects::GenerateMealPlanInput},
};

/// Service trait for whole-week meal plan generation.
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanGenerationService: Send + Sync {
    fn generate_meal_plan(
        &self,
        access_token: AccessToken,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<WeeklyPlanResult, CoreError>> + Send;
}
