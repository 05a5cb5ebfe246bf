use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::workflows::staffing::plans::domain::{
    StaffingPlan, StaffingPlanId, StaffingPlanItemRecord, StaffingPlanRecord,
};
use crate::workflows::staffing::plans::repository::{RepositoryError, StaffingPlanRepository};
use crate::workflows::staffing::plans::{staffing_plan_router, StaffingPlanService};

pub(super) fn record() -> StaffingPlanRecord {
    StaffingPlanRecord {
        company: "Northwind Retail".to_string(),
        currency: Some("INR".to_string()),
        from_date: NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid date"),
        to_date: NaiveDate::from_ymd_opt(2026, 9, 30).expect("valid date"),
        staffing_details: vec![
            StaffingPlanItemRecord {
                designation: "Store Manager".to_string(),
                vacancies: 4,
                estimated_cost_per_position: dec!(900000),
                assign_to: Some("asha@hr.co-2".to_string()),
            },
            StaffingPlanItemRecord {
                designation: "Cashier".to_string(),
                vacancies: 10,
                estimated_cost_per_position: dec!(300000),
                assign_to: None,
            },
        ],
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    plans: Arc<Mutex<HashMap<StaffingPlanId, StaffingPlan>>>,
}

impl StaffingPlanRepository for MemoryRepository {
    fn insert(&self, plan: StaffingPlan) -> Result<StaffingPlan, RepositoryError> {
        let mut guard = self.plans.lock().expect("repository mutex poisoned");
        if guard.contains_key(&plan.plan_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(plan.plan_id.clone(), plan.clone());
        Ok(plan)
    }

    fn update(&self, plan: StaffingPlan) -> Result<(), RepositoryError> {
        let mut guard = self.plans.lock().expect("repository mutex poisoned");
        if guard.contains_key(&plan.plan_id) {
            guard.insert(plan.plan_id.clone(), plan);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &StaffingPlanId) -> Result<Option<StaffingPlan>, RepositoryError> {
        let guard = self.plans.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl StaffingPlanRepository for UnavailableRepository {
    fn insert(&self, _plan: StaffingPlan) -> Result<StaffingPlan, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn update(&self, _plan: StaffingPlan) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn fetch(&self, _id: &StaffingPlanId) -> Result<Option<StaffingPlan>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn build_service() -> (StaffingPlanService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = StaffingPlanService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: StaffingPlanService<MemoryRepository>) -> axum::Router {
    staffing_plan_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
