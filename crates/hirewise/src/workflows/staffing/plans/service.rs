use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{StaffingPlan, StaffingPlanError, StaffingPlanId, StaffingPlanRecord};
use super::repository::{RepositoryError, StaffingPlanRepository};
use super::summary::StaffingPlanSummary;

static PLAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_plan_id() -> StaffingPlanId {
    let id = PLAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    StaffingPlanId(format!("sp-{id:06}"))
}

/// Applies allocation edits to stored staffing plans.
pub struct StaffingPlanService<R> {
    repository: Arc<R>,
}

impl<R> StaffingPlanService<R>
where
    R: StaffingPlanRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn create(&self, record: StaffingPlanRecord) -> Result<StaffingPlan, StaffingServiceError> {
        let plan = StaffingPlan::from_record(next_plan_id(), record)?;
        let stored = self.repository.insert(plan)?;
        info!(plan_id = %stored.plan_id.0, rows = stored.items.len(), "staffing plan created");
        warn_if_over_allocated(&stored);
        Ok(stored)
    }

    pub fn get(&self, plan_id: &StaffingPlanId) -> Result<StaffingPlan, StaffingServiceError> {
        let plan = self
            .repository
            .fetch(plan_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(plan)
    }

    pub fn summary(
        &self,
        plan_id: &StaffingPlanId,
    ) -> Result<StaffingPlanSummary, StaffingServiceError> {
        Ok(self.get(plan_id)?.summary())
    }

    /// Sets a recruiter's share of one row. New recruiters are appended and a
    /// count of zero (or below) drops them. Counts above the remaining
    /// vacancies are stored and reported as warnings.
    pub fn assign(
        &self,
        plan_id: &StaffingPlanId,
        item_index: usize,
        assignee_id: &str,
        count: i64,
    ) -> Result<StaffingPlan, StaffingServiceError> {
        let mut plan = self.get(plan_id)?;
        let item = plan.item_mut(item_index)?;
        let allocation = &mut item.allocation;

        if allocation.allocation_for(assignee_id).is_some() {
            allocation.update_allocation(assignee_id, count);
        } else if count > 0 {
            let initial = u32::try_from(count).unwrap_or(u32::MAX);
            if !allocation.add_assignment(assignee_id, initial) {
                return Err(StaffingPlanError::InvalidAssignee(assignee_id.to_string()).into());
            }
        }

        self.repository.update(plan.clone())?;
        warn_if_over_allocated(&plan);
        Ok(plan)
    }

    /// Removes a recruiter from one row; unknown recruiters are ignored.
    pub fn unassign(
        &self,
        plan_id: &StaffingPlanId,
        item_index: usize,
        assignee_id: &str,
    ) -> Result<StaffingPlan, StaffingServiceError> {
        let mut plan = self.get(plan_id)?;
        if plan.item_mut(item_index)?.allocation.remove_assignment(assignee_id) {
            self.repository.update(plan.clone())?;
        }
        Ok(plan)
    }
}

fn warn_if_over_allocated(plan: &StaffingPlan) {
    for item in plan
        .items
        .iter()
        .filter(|item| item.allocation.is_over_allocated())
    {
        warn!(
            plan_id = %plan.plan_id.0,
            designation = %item.designation,
            vacancies = item.vacancies(),
            allocated = item.allocation.total_allocated(),
            "staffing plan row is over-allocated"
        );
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StaffingServiceError {
    #[error(transparent)]
    Plan(#[from] StaffingPlanError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
