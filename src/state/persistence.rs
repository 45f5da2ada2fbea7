use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::CALCULATION_METHOD;
use crate::error::{NutriError, Result};
use crate::models::{MealPlanSnapshot, PersonalInfo, ResultsSummary};
use crate::state::SessionId;

/// Default number of history entries returned.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub const CALCULATIONS_FILE: &str = "calculations.json";
pub const MEAL_PLANS_FILE: &str = "meal_plans.json";

/// A stored calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub session_id: SessionId,
    pub personal_info: PersonalInfo,
    pub results: ResultsSummary,
    pub calculation_method: String,
    pub created_at: DateTime<Utc>,
}

/// A stored meal plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRecord {
    pub session_id: SessionId,
    pub plan: MealPlanSnapshot,
    pub created_at: DateTime<Utc>,
}

/// Where calculations and meal plans are kept between runs.
pub trait NutritionStore {
    fn save_calculation(
        &self,
        session: &SessionId,
        personal: &PersonalInfo,
        results: &ResultsSummary,
    ) -> Result<()>;

    fn save_meal_plan(&self, session: &SessionId, plan: &MealPlanSnapshot) -> Result<()>;

    /// Past calculations for a session, most recent first.
    fn history(&self, session: &SessionId, limit: usize) -> Result<Vec<CalculationRecord>>;
}

fn calculation_record(
    session: &SessionId,
    personal: &PersonalInfo,
    results: &ResultsSummary,
) -> CalculationRecord {
    CalculationRecord {
        session_id: session.clone(),
        personal_info: *personal,
        results: results.clone(),
        calculation_method: CALCULATION_METHOD.to_string(),
        created_at: Utc::now(),
    }
}

fn meal_plan_record(session: &SessionId, plan: &MealPlanSnapshot) -> MealPlanRecord {
    MealPlanRecord {
        session_id: session.clone(),
        plan: plan.clone(),
        created_at: Utc::now(),
    }
}

/// Most recent first. Records are stored in insertion order, so equal
/// timestamps keep reverse insertion order.
fn select_history<'a, I>(records: I, session: &SessionId, limit: usize) -> Vec<CalculationRecord>
where
    I: DoubleEndedIterator<Item = &'a CalculationRecord>,
{
    let mut selected: Vec<CalculationRecord> = records
        .rev()
        .filter(|r| &r.session_id == session)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected.truncate(limit);
    selected
}

/// Load a JSON array of records; a missing file is an empty list.
pub fn load_records<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Save a JSON array of records, creating the parent directory if needed.
pub fn save_records<T: Serialize, P: AsRef<Path>>(path: P, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// JSON files in a data directory, one per record kind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn append<T: Serialize + DeserializeOwned>(&self, file: &str, record: T) -> Result<()> {
        let path = self.dir.join(file);
        let mut records: Vec<T> = load_records(&path)?;
        records.push(record);
        save_records(&path, &records)
    }
}

impl NutritionStore for JsonFileStore {
    fn save_calculation(
        &self,
        session: &SessionId,
        personal: &PersonalInfo,
        results: &ResultsSummary,
    ) -> Result<()> {
        self.append(
            CALCULATIONS_FILE,
            calculation_record(session, personal, results),
        )
    }

    fn save_meal_plan(&self, session: &SessionId, plan: &MealPlanSnapshot) -> Result<()> {
        self.append(MEAL_PLANS_FILE, meal_plan_record(session, plan))
    }

    fn history(&self, session: &SessionId, limit: usize) -> Result<Vec<CalculationRecord>> {
        let records: Vec<CalculationRecord> = load_records(self.dir.join(CALCULATIONS_FILE))?;
        Ok(select_history(records.iter(), session, limit))
    }
}

/// In-process store, used in tests and as a fallback when nothing should touch disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    calculations: Mutex<Vec<CalculationRecord>>,
    meal_plans: Mutex<Vec<MealPlanRecord>>,
}

fn poisoned<T>(_: T) -> NutriError {
    NutriError::Persistence("store lock poisoned".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meal_plans(&self, session: &SessionId) -> Result<Vec<MealPlanRecord>> {
        let plans = self.meal_plans.lock().map_err(poisoned)?;
        Ok(plans
            .iter()
            .filter(|p| &p.session_id == session)
            .cloned()
            .collect())
    }
}

impl NutritionStore for MemoryStore {
    fn save_calculation(
        &self,
        session: &SessionId,
        personal: &PersonalInfo,
        results: &ResultsSummary,
    ) -> Result<()> {
        self.calculations
            .lock()
            .map_err(poisoned)?
            .push(calculation_record(session, personal, results));
        Ok(())
    }

    fn save_meal_plan(&self, session: &SessionId, plan: &MealPlanSnapshot) -> Result<()> {
        self.meal_plans
            .lock()
            .map_err(poisoned)?
            .push(meal_plan_record(session, plan));
        Ok(())
    }

    fn history(&self, session: &SessionId, limit: usize) -> Result<Vec<CalculationRecord>> {
        let records = self.calculations.lock().map_err(poisoned)?;
        Ok(select_history(records.iter(), session, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_profile;
    use crate::models::{
        ActivityLevel, Climate, Gender, Goal, MacroSplit, MealPlan, NutritionProfile,
    };
    use tempfile::tempdir;

    fn profile(weight: f64) -> NutritionProfile {
        let personal = PersonalInfo {
            weight,
            height: 170.0,
            age: 35,
            gender: Gender::Female,
            activity_level: ActivityLevel::LightlyActive,
            goal: Goal::Lose,
        };
        build_profile(&personal, MacroSplit::default(), Climate::Temperate)
    }

    fn save(store: &dyn NutritionStore, session: &SessionId, weight: f64) {
        let profile = profile(weight);
        store
            .save_calculation(session, &profile.personal_info, &ResultsSummary::from(&profile))
            .unwrap();
    }

    #[test]
    fn test_file_store_history_most_recent_first() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let session = SessionId::new("abc");

        save(&store, &session, 60.0);
        save(&store, &session, 61.0);
        save(&store, &session, 62.0);

        let history = store.history(&session, DEFAULT_HISTORY_LIMIT).unwrap();
        let weights: Vec<f64> = history.iter().map(|r| r.personal_info.weight).collect();
        assert_eq!(weights, vec![62.0, 61.0, 60.0]);
        assert_eq!(history[0].calculation_method, CALCULATION_METHOD);
    }

    #[test]
    fn test_history_scoped_to_session_and_limited() {
        let store = MemoryStore::new();
        let mine = SessionId::new("mine");
        let theirs = SessionId::new("theirs");

        for weight in [60.0, 61.0, 62.0] {
            save(&store, &mine, weight);
        }
        save(&store, &theirs, 90.0);

        let history = store.history(&mine, 2).unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.session_id == mine));
        assert_eq!(history[0].personal_info.weight, 62.0);
        assert_eq!(store.history(&theirs, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_file_store_meal_plans_append() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        let session = SessionId::new("abc");
        let plan = MealPlan::new(2000.0).snapshot();

        store.save_meal_plan(&session, &plan).unwrap();
        store.save_meal_plan(&session, &plan).unwrap();

        let records: Vec<MealPlanRecord> =
            load_records(store.dir().join(MEAL_PLANS_FILE)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].plan.target_calories, 2000);
    }

    #[test]
    fn test_missing_files_mean_empty_history() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.history(&SessionId::new("x"), 10).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CALCULATIONS_FILE), "not json").unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.history(&SessionId::new("x"), 10).is_err());
    }
}
