use clap::Args;
use realty_calc::calculators::format::format_currency;
use realty_calc::calculators::mortgage::{
    compute_mortgage, EscrowRates, LoanType, MortgageBreakdown, MortgageInput,
};
use realty_calc::calculators::valuation::{
    estimate_value, location_multiplier, FixedJitter, JitterSource, ValuationFactors,
    ValuationInput, ValuationResult,
};
use realty_calc::calculators::CalculatorServiceError;
use realty_calc::config::AppConfig;
use realty_calc::error::AppError;

use crate::infra::jitter_source;

#[derive(Args, Debug)]
pub(crate) struct MortgageArgs {
    /// Purchase price of the property
    #[arg(long)]
    pub(crate) price: f64,
    /// Cash paid up front
    #[arg(long, default_value_t = 0.0)]
    pub(crate) down_payment: f64,
    /// Annual interest rate in percent (e.g. 6.5)
    #[arg(long)]
    pub(crate) rate: f64,
    /// Loan term in years
    #[arg(long, default_value_t = MortgageInput::DEFAULT_TERM_YEARS)]
    pub(crate) term: u32,
    /// Loan program: conventional, fha, va, or usda
    #[arg(long, default_value = "conventional", value_parser = parse_loan_type)]
    pub(crate) loan_type: LoanType,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Street address
    #[arg(long)]
    pub(crate) address: String,
    #[arg(long)]
    pub(crate) city: String,
    /// State name, e.g. "Texas"
    #[arg(long)]
    pub(crate) state: String,
    #[arg(long)]
    pub(crate) zip_code: String,
    #[arg(long)]
    pub(crate) bedrooms: Option<u32>,
    #[arg(long)]
    pub(crate) bathrooms: Option<u32>,
    #[arg(long)]
    pub(crate) square_feet: Option<u32>,
    #[arg(long)]
    pub(crate) year_built: Option<u32>,
    /// Year used to age the property (defaults to VALUATION_REFERENCE_YEAR or the current year)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
    /// Seed the jitter for a reproducible estimate
    #[arg(long, conflicts_with = "no_jitter")]
    pub(crate) seed: Option<u64>,
    /// Report the unjittered estimate
    #[arg(long)]
    pub(crate) no_jitter: bool,
}

fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    LoanType::parse(raw).map_err(|err| err.to_string())
}

pub(crate) fn run_mortgage(args: MortgageArgs) -> Result<(), AppError> {
    let input = MortgageInput {
        property_price: args.price,
        down_payment: args.down_payment,
        interest_rate: args.rate,
        loan_term_years: args.term,
        loan_type: args.loan_type,
    };

    let result = compute_mortgage(&input, &EscrowRates::standard())
        .map_err(CalculatorServiceError::from)?;
    render_mortgage(&input, &result.rounded());
    Ok(())
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let reference_year = args
        .reference_year
        .or(config.calculators.reference_year)
        .unwrap_or_else(current_year);

    let jitter: std::sync::Arc<dyn JitterSource> = if args.no_jitter {
        std::sync::Arc::new(FixedJitter::NONE)
    } else {
        jitter_source(args.seed.or(config.calculators.jitter_seed))
    };

    let input = ValuationInput {
        address: args.address,
        city: args.city,
        state: args.state,
        zip_code: args.zip_code,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
        square_feet: args.square_feet,
        year_built: args.year_built,
    };

    let result = estimate_value(
        &input,
        &ValuationFactors::standard(),
        reference_year,
        jitter.as_ref(),
    )
    .map_err(CalculatorServiceError::from)?;
    render_estimate(&input, &result, reference_year);
    Ok(())
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().date_naive().year()
}

fn render_mortgage(input: &MortgageInput, breakdown: &MortgageBreakdown) {
    println!("Mortgage estimate ({} loan)", input.loan_type.label());
    println!(
        "Price {} with {} down ({:.2}%), {}-year term at {}%",
        format_currency(input.property_price),
        format_currency(input.down_payment),
        breakdown.down_payment_percentage,
        input.loan_term_years,
        input.interest_rate
    );
    println!("Loan amount: {}", format_currency(breakdown.loan_amount));

    println!("\nMonthly payment");
    println!(
        "- Principal & interest: {}",
        format_currency(breakdown.monthly_principal_interest)
    );
    println!(
        "- Property tax: {}",
        format_currency(breakdown.monthly_property_tax)
    );
    println!("- Insurance: {}", format_currency(breakdown.monthly_insurance));
    if breakdown.monthly_pmi > 0.0 {
        println!("- PMI: {}", format_currency(breakdown.monthly_pmi));
    } else {
        println!("- PMI: none");
    }
    println!(
        "Total monthly payment: {}",
        format_currency(breakdown.total_monthly_payment)
    );

    println!("\nOver the life of the loan");
    println!("- Total paid: {}", format_currency(breakdown.total_payment));
    println!(
        "- Total interest: {}",
        format_currency(breakdown.total_interest_paid)
    );
}

fn render_estimate(input: &ValuationInput, result: &ValuationResult, reference_year: i32) {
    println!("Home value estimate for {}", result.full_address);
    println!(
        "Estimated value: {}",
        format_currency(result.estimated_value)
    );
    println!("Likely range: {}", result.formatted_value_range());
    println!(
        "Location multiplier: {:.1} (aged against {reference_year})",
        location_multiplier(&input.state)
    );
    if input.supplied_square_feet().is_none() {
        println!("Square footage not provided; estimate uses the flat regional base.");
    }
}
