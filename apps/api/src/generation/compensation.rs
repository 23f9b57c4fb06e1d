//! Salary expectations, scaled by job type and experience.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::generation::catalog::{Catalog, SalaryBand};
use crate::models::campaign::Campaign;

/// ±10%
const NOISE: f64 = 0.10;

/// The campaign's job type when it names a known band, else a uniform pick.
/// `None` only for a catalog without bands.
pub fn resolve_salary_band<'a>(
    catalog: &'a Catalog,
    campaign: &Campaign,
    rng: &mut dyn RngCore,
) -> Option<&'a SalaryBand> {
    let declared = campaign
        .job_type
        .as_deref()
        .map(str::trim)
        .and_then(|job_type| catalog.salary_band(job_type));
    match declared {
        Some(band) => Some(band),
        None => catalog.salary_bands.choose(rng),
    }
}

/// Band draw × `(0.8 + experience/10)` × noise.
pub fn expected_pay(band: &SalaryBand, experience: f32, rng: &mut dyn RngCore) -> f64 {
    let base = band.min + rng.gen::<f64>() * (band.max - band.min);
    let multiplier = 0.8 + experience as f64 / 10.0;
    let noise = 1.0 + rng.gen_range(-NOISE..=NOISE);
    base * multiplier * noise
}

/// Annual pay to the nearest thousand (`$128,000`); hourly to the dollar (`$85/hr`).
pub fn format_pay(band: &SalaryBand, amount: f64) -> String {
    if band.hourly {
        format!("${}/hr", amount.round() as u64)
    } else {
        let thousands = (amount / 1000.0).round() as u64;
        format!("${}", group_thousands(thousands * 1000))
    }
}

pub fn build_salary(
    catalog: &Catalog,
    campaign: &Campaign,
    experience: f32,
    rng: &mut dyn RngCore,
) -> String {
    match resolve_salary_band(catalog, campaign, rng) {
        Some(band) => {
            let amount = expected_pay(band, experience, rng);
            format_pay(band, amount)
        }
        None => String::new(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
