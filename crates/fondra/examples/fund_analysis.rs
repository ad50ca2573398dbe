//! Example: Fund Performance Analysis
//!
//! Builds a synthetic fund NAV series and benchmark price series, derives
//! returns, and prints per-window performance and risk summaries:
//! 1. Generating two years of correlated daily prices
//! 2. Constructing `Fund` and `Benchmark` assets
//! 3. Computing YTD / 1Y / full-history window summaries
//! 4. Rebasing both assets to a base-100 comparison index
//!
//! Run with: `cargo run --example fund_analysis --features full`

use chrono::{Duration, NaiveDate};
use fondra::{
    assets::{Benchmark, Fund, rebase_100},
    metrics::FundReport,
    primitives::{Region, TimeSeries, WindowSpec, WindowStart},
    traits::FinancialAsset,
};
use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

/// Two years of daily rows.
const N_DAYS: usize = 504;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (fund_nav, benchmark_prices, risk_free) = generate_market_data()?;

    let fund = Fund::new("Example US Equity Fund", Region::Us, fund_nav)?;
    let benchmark = Benchmark::new("SPX", benchmark_prices)?;

    println!("=== Fund Performance Analysis ===\n");
    println!(
        "{} | {} NAV rows | region {}",
        fund.name(),
        fund.nav().len(),
        fund.region()
    );

    let windows = [
        WindowSpec::ytd(),
        WindowSpec::one_year(),
        WindowSpec::new("Full", WindowStart::TradingDays(N_DAYS)),
    ];

    let report = FundReport::compute(
        fund.name().as_str(),
        &windows,
        fund.returns(),
        benchmark.returns(),
        &risk_free,
    );
    println!("\n{report}");

    // Base-100 comparison over the common history
    let (fund_aligned, bench_aligned) =
        fund.returns().align(benchmark.returns());
    let fund_index = rebase_100(&fund_aligned)?;
    let bench_index = rebase_100(&bench_aligned)?;
    println!(
        "Base-100 endpoints: fund {:.2}, benchmark {:.2}",
        fund_index.last_value().unwrap_or(100.0),
        bench_index.last_value().unwrap_or(100.0)
    );

    Ok(())
}

/// Generate correlated fund/benchmark price paths plus a flat risk-free
/// rate series.
fn generate_market_data()
-> Result<(TimeSeries, TimeSeries, TimeSeries), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).ok_or("bad start date")?;
    let dates: Vec<NaiveDate> =
        (0..N_DAYS).map(|i| start + Duration::days(i as i64)).collect();

    let mut rng = StdRng::seed_from_u64(7);
    let market_shock = Normal::new(0.0003, 0.01)?;

    let mut fund_nav = Vec::with_capacity(N_DAYS);
    let mut bench_price = Vec::with_capacity(N_DAYS);
    let (mut nav, mut price) = (100.0_f64, 4000.0_f64);
    for _ in 0..N_DAYS {
        let shock: f64 = market_shock.sample(&mut rng);
        let idio: f64 = rng.r#gen::<f64>() * 0.004 - 0.002;
        price *= 1.0 + shock;
        nav *= 1.0 + 0.9 * shock + idio;
        fund_nav.push(nav);
        bench_price.push(price);
    }

    let fund = TimeSeries::new(dates.clone(), Array1::from_vec(fund_nav))?;
    let bench = TimeSeries::new(dates.clone(), Array1::from_vec(bench_price))?;
    // Daily risk-free rate of one basis point, aligned with the returns
    let rf = TimeSeries::new(dates[1..].to_vec(), Array1::from_elem(N_DAYS - 1, 0.01))?;

    Ok((fund, bench, rf))
}
