use super::domain::{StaffingPlan, StaffingPlanId};

/// Storage seam standing in for the backend that owns staffing plan records.
pub trait StaffingPlanRepository: Send + Sync {
    fn insert(&self, plan: StaffingPlan) -> Result<StaffingPlan, RepositoryError>;
    fn update(&self, plan: StaffingPlan) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &StaffingPlanId) -> Result<Option<StaffingPlan>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
