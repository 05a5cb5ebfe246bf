use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflows::deals::Currency;
use crate::workflows::staffing::allocation::Allocation;

/// Identifier wrapper for stored staffing plans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffingPlanId(pub String);

/// Staffing plan payload as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPlanRecord {
    pub company: String,
    #[serde(default)]
    pub currency: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(default)]
    pub staffing_details: Vec<StaffingPlanItemRecord>,
}

/// One designation row with its serialized recruiter allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPlanItemRecord {
    pub designation: String,
    pub vacancies: u32,
    #[serde(default)]
    pub estimated_cost_per_position: Decimal,
    #[serde(default)]
    pub assign_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffingPlanItem {
    pub designation: String,
    pub estimated_cost_per_position: Decimal,
    pub allocation: Allocation,
}

impl StaffingPlanItem {
    pub fn vacancies(&self) -> u32 {
        self.allocation.total_vacancies()
    }

    /// Vacancies times cost per position, in raw currency units.
    pub fn estimated_cost(&self) -> Decimal {
        self.estimated_cost_per_position
            .checked_mul(Decimal::from(self.vacancies()))
            .unwrap_or(Decimal::MAX)
    }

    pub fn from_record(record: StaffingPlanItemRecord) -> Self {
        let allocation = Allocation::parse(
            record.vacancies,
            record.assign_to.as_deref().unwrap_or_default(),
        );

        Self {
            designation: record.designation.trim().to_string(),
            estimated_cost_per_position: record.estimated_cost_per_position.max(Decimal::ZERO),
            allocation,
        }
    }

    pub fn to_record(&self) -> StaffingPlanItemRecord {
        let assign_to = if self.allocation.is_empty() {
            None
        } else {
            Some(self.allocation.serialize())
        };

        StaffingPlanItemRecord {
            designation: self.designation.clone(),
            vacancies: self.vacancies(),
            estimated_cost_per_position: self.estimated_cost_per_position,
            assign_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffingPlan {
    pub plan_id: StaffingPlanId,
    pub company: String,
    pub currency: Currency,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub items: Vec<StaffingPlanItem>,
}

impl StaffingPlan {
    /// Builds a plan from a backend record after checking the fields the
    /// allocation rules depend on.
    pub fn from_record(
        plan_id: StaffingPlanId,
        record: StaffingPlanRecord,
    ) -> Result<Self, StaffingPlanError> {
        let company = record.company.trim().to_string();
        if company.is_empty() {
            return Err(StaffingPlanError::MissingCompany);
        }
        if record.to_date < record.from_date {
            return Err(StaffingPlanError::InvalidPeriod {
                from_date: record.from_date,
                to_date: record.to_date,
            });
        }

        let items = record
            .staffing_details
            .into_iter()
            .map(StaffingPlanItem::from_record)
            .collect::<Vec<_>>();

        if let Some(item) = items.iter().find(|item| item.designation.is_empty()) {
            return Err(StaffingPlanError::MissingDesignation {
                vacancies: item.vacancies(),
            });
        }

        Ok(Self {
            plan_id,
            company,
            currency: record
                .currency
                .as_deref()
                .map(Currency::resolve)
                .unwrap_or_default(),
            from_date: record.from_date,
            to_date: record.to_date,
            items,
        })
    }

    pub fn to_record(&self) -> StaffingPlanRecord {
        StaffingPlanRecord {
            company: self.company.clone(),
            currency: Some(self.currency.code().to_string()),
            from_date: self.from_date,
            to_date: self.to_date,
            staffing_details: self.items.iter().map(StaffingPlanItem::to_record).collect(),
        }
    }

    pub fn item_mut(&mut self, index: usize) -> Result<&mut StaffingPlanItem, StaffingPlanError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(StaffingPlanError::ItemNotFound { index, len })
    }
}

/// Validation failures raised while building or editing a plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaffingPlanError {
    #[error("staffing plan requires a company")]
    MissingCompany,
    #[error("staffing plan period ends ({to_date}) before it starts ({from_date})")]
    InvalidPeriod {
        from_date: NaiveDate,
        to_date: NaiveDate,
    },
    #[error("staffing plan row with {vacancies} vacancies has no designation")]
    MissingDesignation { vacancies: u32 },
    #[error("staffing plan has no row {index} (rows: {len})")]
    ItemNotFound { index: usize, len: usize },
    #[error("assignee '{0}' cannot be stored in an allocation")]
    InvalidAssignee(String),
}
