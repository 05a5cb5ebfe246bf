use serde::Serialize;

use super::allocation::{Allocation, AllocationStatus, Assignment};

/// Read model of an allocation for API responses and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationView {
    pub assign_to: String,
    pub assignments: Vec<Assignment>,
    pub total_vacancies: u32,
    pub total_allocated: u64,
    pub remaining: u32,
    pub status: AllocationStatus,
    pub status_label: &'static str,
    pub over_allocated: bool,
    pub suggested_initial_count: u32,
}

impl From<&Allocation> for AllocationView {
    fn from(allocation: &Allocation) -> Self {
        let status = allocation.status();
        Self {
            assign_to: allocation.serialize(),
            assignments: allocation.assignments().to_vec(),
            total_vacancies: allocation.total_vacancies(),
            total_allocated: allocation.total_allocated(),
            remaining: allocation.remaining(),
            status,
            status_label: status.label(),
            over_allocated: status.is_warning(),
            suggested_initial_count: allocation.suggested_initial_count(),
        }
    }
}
