use chrono::NaiveDate;
use hirewise::workflows::staffing::plans::{
    RepositoryError, StaffingPlan, StaffingPlanId, StaffingPlanRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the backend that persists staffing plans.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStaffingPlanRepository {
    plans: Arc<Mutex<HashMap<StaffingPlanId, StaffingPlan>>>,
}

impl InMemoryStaffingPlanRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<StaffingPlanId, StaffingPlan>>, RepositoryError>
    {
        self.plans
            .lock()
            .map_err(|_| RepositoryError::Unavailable("plan store lock poisoned".to_string()))
    }
}

impl StaffingPlanRepository for InMemoryStaffingPlanRepository {
    fn insert(&self, plan: StaffingPlan) -> Result<StaffingPlan, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&plan.plan_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(plan.plan_id.clone(), plan.clone());
        Ok(plan)
    }

    fn update(&self, plan: StaffingPlan) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&plan.plan_id) {
            guard.insert(plan.plan_id.clone(), plan);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &StaffingPlanId) -> Result<Option<StaffingPlan>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim().replace(',', "").as_str())
        .map_err(|err| format!("failed to parse '{raw}' as a decimal number ({err})"))
}
