use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{StaffingPlan, StaffingPlanId};
use crate::workflows::deals::{format_currency_abbreviated, Currency};
use crate::workflows::staffing::views::AllocationView;

#[derive(Debug, Clone, Serialize)]
pub struct PlanItemSummary {
    pub index: usize,
    pub designation: String,
    pub estimated_cost: Decimal,
    pub allocation: AllocationView,
}

/// Vacancies a recruiter holds across every row of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssigneeLoadEntry {
    pub assignee_id: String,
    pub allocated: u64,
    pub designations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaffingPlanSummary {
    pub plan_id: StaffingPlanId,
    pub company: String,
    pub currency: Currency,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub total_vacancies: u64,
    pub total_allocated: u64,
    pub unassigned_vacancies: u64,
    pub estimated_budget: Decimal,
    pub estimated_budget_display: String,
    pub items: Vec<PlanItemSummary>,
    pub assignee_load: Vec<AssigneeLoadEntry>,
    pub warnings: Vec<String>,
}

impl StaffingPlan {
    pub fn summary(&self) -> StaffingPlanSummary {
        let mut load: BTreeMap<&str, AssigneeLoadEntry> = BTreeMap::new();
        let mut warnings = Vec::new();
        let mut items = Vec::with_capacity(self.items.len());
        let mut estimated_budget = Decimal::ZERO;

        for (index, item) in self.items.iter().enumerate() {
            let allocation = &item.allocation;
            let estimated_cost = item.estimated_cost();
            estimated_budget = estimated_budget
                .checked_add(estimated_cost)
                .unwrap_or(Decimal::MAX);

            if allocation.is_over_allocated() {
                warnings.push(format!(
                    "{}: {} allocated against {} vacancies",
                    item.designation,
                    allocation.total_allocated(),
                    allocation.total_vacancies()
                ));
            }

            for assignment in allocation.assignments() {
                let entry = load
                    .entry(assignment.assignee_id.as_str())
                    .or_insert_with(|| AssigneeLoadEntry {
                        assignee_id: assignment.assignee_id.clone(),
                        allocated: 0,
                        designations: Vec::new(),
                    });
                entry.allocated += u64::from(assignment.allocation);
                entry.designations.push(item.designation.clone());
            }

            items.push(PlanItemSummary {
                index,
                designation: item.designation.clone(),
                estimated_cost,
                allocation: AllocationView::from(allocation),
            });
        }

        let total_vacancies = self
            .items
            .iter()
            .map(|item| u64::from(item.vacancies()))
            .sum();
        let total_allocated = self
            .items
            .iter()
            .map(|item| item.allocation.total_allocated())
            .sum();
        let unassigned_vacancies = self
            .items
            .iter()
            .map(|item| u64::from(item.allocation.remaining()))
            .sum();

        let mut assignee_load = load.into_values().collect::<Vec<_>>();
        assignee_load.sort_by(|a, b| {
            b.allocated
                .cmp(&a.allocated)
                .then_with(|| a.assignee_id.cmp(&b.assignee_id))
        });

        StaffingPlanSummary {
            plan_id: self.plan_id.clone(),
            company: self.company.clone(),
            currency: self.currency,
            from_date: self.from_date,
            to_date: self.to_date,
            total_vacancies,
            total_allocated,
            unassigned_vacancies,
            estimated_budget,
            estimated_budget_display: format_currency_abbreviated(estimated_budget, self.currency),
            items,
            assignee_load,
            warnings,
        }
    }
}
