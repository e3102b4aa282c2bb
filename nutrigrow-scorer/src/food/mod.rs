//! Nutrition plans and single-food explanation.

mod details;
mod rules;

pub use details::{
    AgeGroup, BmiCategory, DietaryInfo, FoodDetails, FoodDetailsOutcome, FoodNotFound,
    MatchBreakdown,
};

use std::collections::HashSet;

use log::debug;
use nutrigrow_core::{
    FoodDetailsQuery, FoodQuery, FoodRecord, FoodStore, HealthProfile, NON_VEGETARIAN_MARKERS,
    QueryError,
};
use serde::Serialize;

const PLAN_NOTE: &str = "Recommendations personalized using age, BMI, and health condition";

/// Result of [`FoodMatcher::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionPlan {
    /// Food names, highest protein first.
    pub recommended_foods: Vec<String>,
    /// The limit that was applied.
    pub shown: usize,
    /// Fixed explanatory note.
    pub note: &'static str,
}

/// A narrowing stage of the plan filter.
type Stage = fn(&FoodRecord, &HealthProfile) -> bool;

fn diet_stage(row: &FoodRecord, profile: &HealthProfile) -> bool {
    !profile.is_vegetarian() || !row.category_mentions(&NON_VEGETARIAN_MARKERS)
}

fn age_stage(row: &FoodRecord, profile: &HealthProfile) -> bool {
    match profile.age {
        0..18 => row.sodium <= 200.0 && row.cholesterol <= 100.0,
        41.. => row.sodium <= 150.0 && row.sugars <= 10.0,
        _ => true,
    }
}

fn bmi_stage(row: &FoodRecord, profile: &HealthProfile) -> bool {
    if profile.bmi < 18.5 {
        row.calories >= 150.0
    } else if profile.bmi >= 25.0 {
        row.calories <= 300.0
    } else {
        true
    }
}

fn condition_stage(row: &FoodRecord, profile: &HealthProfile) -> bool {
    match profile.condition_key().as_str() {
        "diabetes" => row.sugars <= 5.0,
        "anemia" => row.protein >= 5.0,
        _ => true,
    }
}

const STAGES: [(&str, Stage); 4] = [
    ("diet", diet_stage),
    ("age", age_stage),
    ("bmi", bmi_stage),
    ("condition", condition_stage),
];

/// Builds nutrition plans and explains foods from a [`FoodStore`].
#[derive(Debug, Clone)]
pub struct FoodMatcher<S> {
    store: S,
}

impl<S: FoodStore> FoodMatcher<S> {
    /// Wrap a food store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Recommend up to `query.limit` distinct foods for the profile.
    ///
    /// Rows pass through diet, age, BMI and condition stages in turn. Any
    /// stage may empty the set; there is no widening. Survivors are ranked
    /// by protein then calories, both descending, and deduplicated by
    /// `Food_Item` keeping the first occurrence.
    ///
    /// # Errors
    /// Returns [`QueryError`] when the query fails validation.
    pub fn plan(&self, query: &FoodQuery) -> Result<NutritionPlan, QueryError> {
        query.validate()?;
        let profile = &query.profile;

        let mut survivors: Vec<&FoodRecord> = self.store.foods().collect();
        for (name, stage) in STAGES {
            survivors.retain(|row| stage(row, profile));
            debug!("{} food rows after the {name} stage", survivors.len());
        }

        survivors.sort_by(|a, b| {
            b.protein
                .total_cmp(&a.protein)
                .then_with(|| b.calories.total_cmp(&a.calories))
        });

        let mut seen = HashSet::new();
        let recommended_foods = survivors
            .into_iter()
            .filter(|row| seen.insert(row.food_item.as_str()))
            .take(query.limit)
            .map(|row| row.food_item.clone())
            .collect();

        Ok(NutritionPlan {
            recommended_foods,
            shown: query.limit,
            note: PLAN_NOTE,
        })
    }

    /// Explain how well `query.food_name` suits the profile.
    ///
    /// The first row whose name matches, ignoring case and surrounding
    /// whitespace, is explained. An unknown food is reported as
    /// [`FoodDetailsOutcome::NotFound`].
    ///
    /// # Errors
    /// Returns [`QueryError`] when the query fails validation.
    pub fn details(&self, query: &FoodDetailsQuery) -> Result<FoodDetailsOutcome, QueryError> {
        query.validate()?;
        let food_key = query.food_name.trim().to_lowercase();
        Ok(
            match self.store.foods().find(|row| row.named(&food_key)) {
                Some(row) => {
                    FoodDetailsOutcome::Found(Box::new(details::explain(row, &query.profile)))
                }
                None => FoodDetailsOutcome::NotFound(FoodNotFound::new(food_key)),
            },
        )
    }
}
