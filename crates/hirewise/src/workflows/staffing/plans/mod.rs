//! Staffing plans: designation rows whose vacancies are split across recruiters.

pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod service;
mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    StaffingPlan, StaffingPlanError, StaffingPlanId, StaffingPlanItem, StaffingPlanItemRecord,
    StaffingPlanRecord,
};
pub use import::{StaffingPlanImportError, StaffingPlanImporter};
pub use repository::{RepositoryError, StaffingPlanRepository};
pub use router::staffing_plan_router;
pub use service::{StaffingPlanService, StaffingServiceError};
pub use summary::{AssigneeLoadEntry, PlanItemSummary, StaffingPlanSummary};
