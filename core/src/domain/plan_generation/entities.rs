use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal::entities::PlanDto;

/// A generated weekly plan plus the model's explanation of its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyPlanResult {
    #[serde(rename = "generatedPlans", alias = "generated_plans")]
    pub generated_plans: Vec<PlanDto>,
    pub reasoning: String,
}
