use chrono::{Local, NaiveDate};
use clap::Args;
use leasing_solver::config::AppConfig;
use leasing_solver::error::AppError;
use leasing_solver::workflows::availability::ReconcileResponse;
use leasing_solver::workflows::intake::{self, CsvIntake};
use leasing_solver::workflows::rent_gap::{RentGapSolver, SolveResponse};
use leasing_solver::Money;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct SolveArgs {
    /// Rent offset to close, e.g. 200 or -87.50
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) target_gap: Money,
    /// CSV export of eligible amenities (columns: id,amount)
    #[arg(long)]
    pub(crate) amenities: PathBuf,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReconcileArgs {
    /// CSV export of active listings (columns: id,unit_id,property_code,status)
    #[arg(long)]
    pub(crate) availabilities: PathBuf,
    /// CSV export of tenancies (columns: id,unit_id,status)
    #[arg(long)]
    pub(crate) tenancies: PathBuf,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_solve(config: &AppConfig, args: SolveArgs) -> Result<(), AppError> {
    let SolveArgs {
        target_gap,
        amenities,
        json,
    } = args;

    intake::validate_target_gap(target_gap)?;
    let options = CsvIntake::amenities_from_path(&amenities)?;
    let solver = RentGapSolver::new(config.solver);
    let response = SolveResponse::new(target_gap, solver.solve(target_gap, &options));
    info!(
        amenities = options.len(),
        selected = response.combination.len(),
        remaining = %response.remaining_gap,
        "rent gap solved"
    );

    if json {
        print_json(&response)
    } else {
        render_solve(&response, options.len(), Local::now().date_naive());
        Ok(())
    }
}

pub(crate) fn run_reconcile(args: ReconcileArgs) -> Result<(), AppError> {
    let ReconcileArgs {
        availabilities,
        tenancies,
        json,
    } = args;

    let listings = CsvIntake::availabilities_from_path(&availabilities)?;
    let tenancies = CsvIntake::tenancies_from_path(&tenancies)?;
    let response = ReconcileResponse::reconcile(&listings, &tenancies)?;
    info!(
        listings = response.evaluated,
        deactivate = response.to_deactivate.len(),
        update_status = response.to_update_status.len(),
        "availability sweep finished"
    );

    if json {
        print_json(&response)
    } else {
        render_reconcile(&response, Local::now().date_naive());
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{rendered}");
    Ok(())
}

fn render_solve(response: &SolveResponse, pool_size: usize, today: NaiveDate) {
    println!("Rent gap solver");
    println!(
        "Target gap: {} across {} eligible amenities (evaluated {})",
        response.target_gap, pool_size, today
    );

    if response.combination.is_empty() {
        println!("\nSelected amenities: none");
    } else {
        println!("\nSelected amenities");
        for option in &response.combination {
            println!("- {}: {}", option.id, option.amount);
        }
    }

    println!("\nApplied total: {}", response.applied_total);
    if response.remaining_gap.is_zero() && !response.combination.is_empty() {
        println!("Remaining gap: none (exact match)");
    } else {
        println!("Remaining gap: {}", response.remaining_gap);
    }
}

fn render_reconcile(response: &ReconcileResponse, today: NaiveDate) {
    println!("Stale availability sweep");
    println!("{} listings checked (evaluated {})", response.evaluated, today);

    if response.to_deactivate.is_empty() {
        println!("\nListings to deactivate: none");
    } else {
        println!("\nListings to deactivate");
        for id in &response.to_deactivate {
            println!("- {id}");
        }
    }

    if response.to_update_status.is_empty() {
        println!("\nStatus corrections: none");
    } else {
        println!("\nStatus corrections");
        for update in &response.to_update_status {
            println!(
                "- {} | unit {} | {} | -> {} (tenancy {})",
                update.id,
                update.unit_id,
                update.property_code,
                update.status,
                update.future_tenancy_id
            );
        }
    }
}
