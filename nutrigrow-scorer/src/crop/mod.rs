//! Crop recommendation and single-crop explanation.

mod details;

pub use details::{
    ClimateMatch, CriterionMatch, CropDetails, CropDetailsOutcome, CropNotFound, MatchStatus,
    NutrientMatch, SoilCompatibility, SoilMatch, Suitability,
};

use std::cmp::Reverse;

use log::debug;
use nutrigrow_core::{
    CropDetailsQuery, CropQuery, CropRecord, CropStore, GrowingConditions, Npk, QueryError,
};
use serde::Serialize;

use crate::diversity::{DiversityScore, assess_diversity};

/// Largest temperature difference, in degrees, a strict match tolerates.
pub(crate) const TEMPERATURE_TOLERANCE: f64 = 3.0;
/// Largest humidity difference, in percentage points, a strict match
/// tolerates.
pub(crate) const HUMIDITY_TOLERANCE: f64 = 10.0;
/// Largest moisture difference, in percentage points, a strict match
/// tolerates.
pub(crate) const MOISTURE_TOLERANCE: f64 = 10.0;
/// Number of best nutrient matches that vote on the recommendation.
const CANDIDATE_POOL: usize = 15;

const RECOMMENDATION_NOTE: &str = "Showing best-matched crops based on soil, climate, and nutrients";

/// Result of [`CropMatcher::recommend`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRecommendation {
    /// Crop type names, most frequent first.
    pub recommended_crops: Vec<String>,
    /// The limit that was applied.
    pub shown: usize,
    /// Fixed explanatory note.
    pub note: &'static str,
    /// Diversity grade of `recommended_crops`.
    pub diversity_score: DiversityScore,
}

/// Recommends and explains crops from a [`CropStore`].
///
/// The matcher holds the store by value; pass a reference or an `Arc` to
/// share one table between matchers.
#[derive(Debug, Clone)]
pub struct CropMatcher<S> {
    store: S,
}

impl<S: CropStore> CropMatcher<S> {
    /// Wrap a crop store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Recommend up to `query.limit` crop types for the field readings.
    ///
    /// Rows within tolerance on temperature, humidity and moisture whose
    /// soil matches are preferred; when none exist every row with the same
    /// soil is considered instead. The fifteen candidates closest in NPK
    /// then vote by crop type. Equal vote counts keep the order in which
    /// each crop first appeared among the ranked candidates.
    ///
    /// # Errors
    /// Returns [`QueryError`] when the query fails validation.
    pub fn recommend(&self, query: &CropQuery) -> Result<CropRecommendation, QueryError> {
        query.validate()?;
        let conditions = &query.conditions;

        let mut candidates: Vec<&CropRecord> = self
            .store
            .crops()
            .filter(|row| within_tolerance(row, conditions))
            .collect();
        if candidates.is_empty() {
            debug!(
                "no crop rows within tolerance; widening to soil `{}`",
                conditions.soil_type
            );
            candidates = self
                .store
                .crops()
                .filter(|row| row.soil_matches(&conditions.soil_type))
                .collect();
        }
        debug!("{} crop candidates before ranking", candidates.len());

        let target = conditions.npk();
        let ranked = rank_by_npk(candidates, &target);
        let recommended_crops = vote(ranked.iter().take(CANDIDATE_POOL).copied(), query.limit);
        let diversity_score = assess_diversity(&recommended_crops);

        Ok(CropRecommendation {
            recommended_crops,
            shown: query.limit,
            note: RECOMMENDATION_NOTE,
            diversity_score,
        })
    }

    /// Explain how well `query.crop_name` suits the field readings.
    ///
    /// An unknown crop is reported as [`CropDetailsOutcome::NotFound`].
    ///
    /// # Errors
    /// Returns [`QueryError`] when the query fails validation.
    pub fn details(&self, query: &CropDetailsQuery) -> Result<CropDetailsOutcome, QueryError> {
        query.validate()?;
        let crop_key = query.crop_name.trim().to_lowercase();
        let target = query.conditions.npk();
        let best = self
            .store
            .crops()
            .filter(|row| row.crop_matches(&crop_key))
            .map(|row| (row.npk_distance(&target), row))
            .reduce(|best, next| if next.0 < best.0 { next } else { best });

        Ok(match best {
            Some((npk_distance, row)) => CropDetailsOutcome::Found(Box::new(
                details::explain(&crop_key, row, npk_distance, &query.conditions),
            )),
            None => CropDetailsOutcome::NotFound(CropNotFound::new(crop_key)),
        })
    }
}

fn within_tolerance(row: &CropRecord, conditions: &GrowingConditions) -> bool {
    abs_diff(row.temperature, conditions.temperature) <= TEMPERATURE_TOLERANCE
        && abs_diff(row.humidity, conditions.humidity) <= HUMIDITY_TOLERANCE
        && abs_diff(row.moisture, conditions.moisture) <= MOISTURE_TOLERANCE
        && row.soil_matches(&conditions.soil_type)
}

#[expect(clippy::float_arithmetic, reason = "tolerance checks compare differences")]
pub(crate) fn abs_diff(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Stable sort by ascending NPK distance; equal distances keep table order.
fn rank_by_npk<'a>(candidates: Vec<&'a CropRecord>, target: &Npk<f64>) -> Vec<&'a CropRecord> {
    let mut scored: Vec<(f64, &CropRecord)> = candidates
        .into_iter()
        .map(|row| (row.npk_distance(target), row))
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, row)| row).collect()
}

/// Count crop types and keep the `limit` most frequent.
///
/// Ties keep first-appearance order because the count table is built in
/// candidate order and sorted stably.
fn vote<'a>(candidates: impl Iterator<Item = &'a CropRecord>, limit: usize) -> Vec<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for row in candidates {
        match tally.iter_mut().find(|(name, _)| *name == row.crop_type) {
            Some((_, count)) => *count += 1,
            None => tally.push((row.crop_type.as_str(), 1)),
        }
    }
    tally.sort_by_key(|&(_, count)| Reverse(count));
    tally
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_owned())
        .collect()
}
