use std::sync::Arc;

use mealplan_core::application::MealPlanAiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealPlanAiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealPlanAiService) -> Self {
        Self { args, service }
    }
}
