use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use hirewise::error::AppError;
use hirewise::workflows::deals::{Currency, DealInputs, DealQuote, FeeBasis, FeeBasisKind};
use hirewise::workflows::staffing::plans::{
    StaffingPlan, StaffingPlanId, StaffingPlanImporter, StaffingPlanRecord, StaffingPlanSummary,
    StaffingServiceError,
};
use hirewise::workflows::staffing::{Allocation, AllocationView};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DealQuoteArgs {
    /// Number of hires the client expects
    #[arg(long)]
    pub(crate) hiring_volume: u32,
    /// Average annual salary in lakhs
    #[arg(long, value_parser = crate::infra::parse_decimal, default_value = "0")]
    pub(crate) salary_lpa: Decimal,
    /// Fee as a percentage of salary
    #[arg(long, value_parser = crate::infra::parse_decimal, conflicts_with = "fixed_charge")]
    pub(crate) fee_rate: Option<Decimal>,
    /// Fixed charge per hire in raw currency units
    #[arg(long, value_parser = crate::infra::parse_decimal)]
    pub(crate) fixed_charge: Option<Decimal>,
    /// Currency code (unknown codes fall back to INR)
    #[arg(long, default_value = "INR")]
    pub(crate) currency: String,
}

impl DealQuoteArgs {
    pub(crate) fn to_inputs(&self) -> DealInputs {
        let fee_basis = match (self.fee_rate, self.fixed_charge) {
            (_, Some(amount_per_hire)) => FeeBasis::Fixed { amount_per_hire },
            (Some(rate), None) => FeeBasis::Percent { rate },
            (None, None) => FeeBasis::empty(FeeBasisKind::Percent),
        };

        DealInputs::new(self.hiring_volume, self.salary_lpa, fee_basis)
            .with_currency(Currency::resolve(&self.currency))
    }
}

#[derive(Args, Debug)]
pub(crate) struct AllocationInspectArgs {
    /// Vacancies available for the opening
    #[arg(long)]
    pub(crate) total_vacancies: u32,
    /// Stored assign_to text, e.g. "jane@co.com-4,raj@co.com-2"
    #[arg(long, default_value = "")]
    pub(crate) assign_to: String,
}

#[derive(Args, Debug)]
pub(crate) struct PlanSummaryArgs {
    /// CSV export with Designation, Vacancies, Estimated Cost Per Position, Assign To
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Company the plan belongs to
    #[arg(long)]
    pub(crate) company: String,
    /// Currency code for budget figures
    #[arg(long)]
    pub(crate) currency: Option<String>,
    /// Plan start date (YYYY-MM-DD). Defaults to the first day of this year.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) from_date: Option<NaiveDate>,
    /// Plan end date (YYYY-MM-DD). Defaults to the last day of this year.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) to_date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Currency code used for the sample quote
    #[arg(long)]
    pub(crate) currency: Option<String>,
}

pub(crate) fn run_deal_quote(args: DealQuoteArgs) {
    let inputs = args.to_inputs();
    render_deal_quote(&inputs, &DealQuote::from_inputs(&inputs));
}

pub(crate) fn run_allocation_inspect(args: AllocationInspectArgs) {
    let allocation = Allocation::parse(args.total_vacancies, &args.assign_to);
    render_allocation(&AllocationView::from(&allocation));
}

pub(crate) fn run_plan_summary(args: PlanSummaryArgs) -> Result<(), AppError> {
    let PlanSummaryArgs {
        csv,
        company,
        currency,
        from_date,
        to_date,
    } = args;

    let year = Local::now().date_naive().year();
    let from_date = from_date
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or_default();
    let to_date = to_date
        .or_else(|| NaiveDate::from_ymd_opt(year, 12, 31))
        .unwrap_or(from_date);

    let plan_id = StaffingPlanId(
        csv.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "csv-import".to_string()),
    );
    let staffing_details = StaffingPlanImporter::from_path(&csv)?;
    let record = StaffingPlanRecord {
        company,
        currency,
        from_date,
        to_date,
        staffing_details,
    };

    let plan = StaffingPlan::from_record(plan_id, record).map_err(StaffingServiceError::from)?;
    render_plan_summary(&plan.summary());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) {
    let currency = args
        .currency
        .as_deref()
        .map(Currency::resolve)
        .unwrap_or_default();

    println!("Hirewise demo");

    let mut inputs = DealInputs::default().with_currency(currency);
    inputs.set_hiring_volume(50);
    inputs.set_average_salary_lpa(Decimal::new(12, 0));
    inputs.set_fee_rate(Decimal::new(833, 2));
    println!("\nLead quoted on a percentage fee");
    render_deal_quote(&inputs, &DealQuote::from_inputs(&inputs));

    inputs.set_hiring_volume(10);
    inputs.switch_fee_basis(FeeBasisKind::Fixed);
    inputs.set_fixed_charge(Decimal::new(50_000, 0));
    println!("\nSame lead switched to a fixed charge per hire");
    render_deal_quote(&inputs, &DealQuote::from_inputs(&inputs));

    let mut allocation = Allocation::new(10);
    for recruiter in ["jane@co.com", "raj@co.com", "li@co.com"] {
        let suggested = allocation.suggested_initial_count();
        allocation.add_assignment(recruiter, suggested);
    }
    println!("\nTen vacancies split with suggested defaults");
    render_allocation(&AllocationView::from(&allocation));

    allocation.update_allocation("raj@co.com", 6);
    println!("\nAfter raising raj@co.com to 6");
    render_allocation(&AllocationView::from(&allocation));
}

fn render_deal_quote(inputs: &DealInputs, quote: &DealQuote) {
    println!(
        "Inputs: {} hires, {} LPA, {} ({})",
        inputs.hiring_volume, inputs.average_salary_lpa, quote.fee_basis_label, quote.currency
    );
    match inputs.fee_basis {
        FeeBasis::Percent { rate } => println!("Fee rate: {rate}%"),
        FeeBasis::Fixed { amount_per_hire } => println!("Charge per hire: {amount_per_hire}"),
    }

    if quote.display.is_empty() {
        println!("Deal value: not set");
    } else {
        println!("Deal value: {} (table: {})", quote.display, quote.abbreviated);
    }
}

fn render_allocation(view: &AllocationView) {
    println!(
        "{} of {} vacancies allocated, {} remaining [{}]",
        view.total_allocated, view.total_vacancies, view.remaining, view.status_label
    );
    for assignment in &view.assignments {
        println!("- {}: {}", assignment.assignee_id, assignment.allocation);
    }
    if view.over_allocated {
        println!("Warning: allocation exceeds the available vacancies");
    } else if view.suggested_initial_count > 0 {
        println!(
            "Next recruiter would default to {}",
            view.suggested_initial_count
        );
    }
    println!("Stored as: \"{}\"", view.assign_to);
}

fn render_plan_summary(summary: &StaffingPlanSummary) {
    println!("Staffing plan {} for {}", summary.plan_id.0, summary.company);
    println!(
        "Period: {} -> {} | budget {} ({})",
        summary.from_date, summary.to_date, summary.estimated_budget_display, summary.currency
    );
    println!(
        "Vacancies: {} total, {} allocated, {} unassigned",
        summary.total_vacancies, summary.total_allocated, summary.unassigned_vacancies
    );

    println!("\nRows");
    for item in &summary.items {
        println!(
            "- [{}] {}: {}/{} allocated ({})",
            item.index,
            item.designation,
            item.allocation.total_allocated,
            item.allocation.total_vacancies,
            item.allocation.status_label
        );
    }

    if summary.assignee_load.is_empty() {
        println!("\nRecruiter load: none");
    } else {
        println!("\nRecruiter load");
        for load in &summary.assignee_load {
            println!(
                "- {}: {} vacancies across {}",
                load.assignee_id,
                load.allocated,
                load.designations.join(", ")
            );
        }
    }

    if !summary.warnings.is_empty() {
        println!("\nWarnings");
        for warning in &summary.warnings {
            println!("- {warning}");
        }
    }
}
