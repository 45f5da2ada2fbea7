//! Glue between the pure engine and the store.
//!
//! Saving is best-effort: a failed write is logged and the caller still gets
//! the computed result.

use tracing::{info, warn};

use crate::engine::assemble_profile;
use crate::error::Result;
use crate::models::{CalculationRequest, MealPlan, NutritionProfile, ResultsSummary};
use crate::state::{CalculationRecord, NutritionStore, SessionId};

pub struct NutritionService<S: NutritionStore> {
    store: S,
    session: SessionId,
}

impl<S: NutritionStore> NutritionService<S> {
    pub fn new(store: S, session: SessionId) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the request, builds the profile and records it.
    ///
    /// Only validation errors are returned.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<NutritionProfile> {
        let validated = request.validate()?;
        let profile = assemble_profile(&validated);
        self.record_calculation(&profile);
        Ok(profile)
    }

    fn record_calculation(&self, profile: &NutritionProfile) {
        let summary = ResultsSummary::from(profile);
        match self
            .store
            .save_calculation(&self.session, &profile.personal_info, &summary)
        {
            Ok(()) => info!(session = %self.session, "saved calculation"),
            Err(e) => warn!(session = %self.session, error = %e, "failed to save calculation"),
        }
    }

    /// An empty plan for the given daily target.
    pub fn start_meal_plan(&self, target_calories: f64) -> MealPlan {
        MealPlan::new(target_calories)
    }

    /// Stores a snapshot of the plan; failures are logged, not returned.
    pub fn save_meal_plan(&self, plan: &MealPlan) {
        match self.store.save_meal_plan(&self.session, &plan.snapshot()) {
            Ok(()) => info!(
                session = %self.session,
                entries = plan.entry_count(),
                "saved meal plan"
            ),
            Err(e) => warn!(session = %self.session, error = %e, "failed to save meal plan"),
        }
    }

    pub fn history(&self, limit: usize) -> Result<Vec<CalculationRecord>> {
        self.store.history(&self.session, limit)
    }

    /// Target calories of the most recent calculation in this session, if any.
    pub fn latest_target_calories(&self) -> Result<Option<i64>> {
        Ok(self
            .history(1)?
            .first()
            .map(|record| record.results.target_calories))
    }
}
