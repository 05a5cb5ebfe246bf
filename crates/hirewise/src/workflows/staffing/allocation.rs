use serde::{Deserialize, Serialize};

use super::codec;

/// Vacancies handed to a single recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub assignee_id: String,
    pub allocation: u32,
}

/// Where an allocation stands relative to its vacancy ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AllocationStatus {
    Unassigned,
    Partial { remaining: u32 },
    Full,
    OverAllocated { excess: u64 },
}

impl AllocationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unassigned => "Unassigned",
            Self::Partial { .. } => "Partially Assigned",
            Self::Full => "Fully Assigned",
            Self::OverAllocated { .. } => "Over Allocated",
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, Self::OverAllocated { .. })
    }
}

/// Vacancies of one opening split across recruiters.
///
/// Entries are unique per assignee and never hold a zero count. The sum may
/// exceed `total_vacancies` while a user is mid-edit; callers read
/// [`Allocation::status`] to warn about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Allocation {
    total_vacancies: u32,
    assignments: Vec<Assignment>,
}

impl Allocation {
    pub fn new(total_vacancies: u32) -> Self {
        Self {
            total_vacancies,
            assignments: Vec::new(),
        }
    }

    /// Rebuilds an allocation from its stored `assign_to` text. Never fails;
    /// unusable tokens are skipped.
    pub fn parse(total_vacancies: u32, serialized: &str) -> Self {
        Self {
            total_vacancies,
            assignments: codec::decode_assignments(serialized),
        }
    }

    pub fn serialize(&self) -> String {
        codec::encode_assignments(&self.assignments)
    }

    pub fn total_vacancies(&self) -> u32 {
        self.total_vacancies
    }

    /// Changes the ceiling without touching existing assignments.
    pub fn set_total_vacancies(&mut self, total_vacancies: u32) {
        self.total_vacancies = total_vacancies;
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn allocation_for(&self, assignee_id: &str) -> Option<u32> {
        self.position(assignee_id)
            .map(|index| self.assignments[index].allocation)
    }

    /// Appends a new assignee. Returns `false` without changes when the id is
    /// already present, cannot be encoded, or the count is zero.
    pub fn add_assignment(&mut self, assignee_id: &str, initial_count: u32) -> bool {
        if initial_count == 0
            || !codec::is_wire_safe(assignee_id)
            || self.position(assignee_id).is_some()
        {
            return false;
        }

        self.assignments.push(Assignment {
            assignee_id: assignee_id.to_string(),
            allocation: initial_count,
        });
        true
    }

    /// Sets an existing assignee's count. Negative counts clamp to zero and a
    /// zero count removes the assignee. The ceiling is not enforced here.
    pub fn update_allocation(&mut self, assignee_id: &str, new_count: i64) -> bool {
        let Some(index) = self.position(assignee_id) else {
            return false;
        };

        let count = new_count.clamp(0, i64::from(u32::MAX)) as u32;
        if count == 0 {
            self.assignments.remove(index);
        } else {
            self.assignments[index].allocation = count;
        }
        true
    }

    pub fn remove_assignment(&mut self, assignee_id: &str) -> bool {
        match self.position(assignee_id) {
            Some(index) => {
                self.assignments.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn total_allocated(&self) -> u64 {
        self.assignments
            .iter()
            .map(|assignment| u64::from(assignment.allocation))
            .sum()
    }

    pub fn remaining(&self) -> u32 {
        let remaining = u64::from(self.total_vacancies).saturating_sub(self.total_allocated());
        // remaining never exceeds total_vacancies, which is a u32.
        remaining as u32
    }

    pub fn is_over_allocated(&self) -> bool {
        self.total_allocated() > u64::from(self.total_vacancies)
    }

    /// Default count offered when adding a recruiter: half of what is left,
    /// at least one, never more than what is left.
    pub fn suggested_initial_count(&self) -> u32 {
        let remaining = self.remaining();
        remaining.min((remaining / 2).max(1))
    }

    pub fn status(&self) -> AllocationStatus {
        let allocated = self.total_allocated();
        let total = u64::from(self.total_vacancies);

        if allocated > total {
            AllocationStatus::OverAllocated {
                excess: allocated - total,
            }
        } else if allocated == total && total > 0 {
            AllocationStatus::Full
        } else if allocated == 0 {
            AllocationStatus::Unassigned
        } else {
            AllocationStatus::Partial {
                remaining: self.remaining(),
            }
        }
    }

    fn position(&self, assignee_id: &str) -> Option<usize> {
        self.assignments
            .iter()
            .position(|assignment| assignment.assignee_id == assignee_id)
    }
}
