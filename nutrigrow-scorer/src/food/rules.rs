//! Ordered rule ladders behind the food explainer.
//!
//! Each ladder is evaluated top to bottom and the first rule whose predicate
//! holds decides the sub-score. A ladder with no matching rule falls through
//! to its `otherwise` verdict.

use nutrigrow_core::{FoodRecord, HealthProfile};

/// Category fragments that rule a food out of a vegetarian diet when
/// explaining a single item. Broader than the plan filter: eggs count.
const NON_VEGETARIAN_DETAIL_MARKERS: [&str; 4] = ["meat", "fish", "chicken", "egg"];

/// Score and wording produced by a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdict {
    pub(crate) score: u8,
    pub(crate) explanation: &'static str,
    pub(crate) benefit: Option<&'static str>,
}

impl Verdict {
    const fn plain(score: u8, explanation: &'static str) -> Self {
        Self {
            score,
            explanation,
            benefit: None,
        }
    }

    const fn with_benefit(score: u8, explanation: &'static str, benefit: &'static str) -> Self {
        Self {
            score,
            explanation,
            benefit: Some(benefit),
        }
    }
}

/// One rung of a ladder.
pub(crate) struct Rule {
    applies: fn(&FoodRecord) -> bool,
    verdict: Verdict,
}

/// First-match-wins list of rules.
pub(crate) struct Ladder {
    rules: &'static [Rule],
    otherwise: Verdict,
}

impl Ladder {
    pub(crate) fn evaluate(&self, row: &FoodRecord) -> Verdict {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(row))
            .map_or(self.otherwise, |rule| rule.verdict)
    }
}

const VEGETARIAN: Ladder = Ladder {
    rules: &[Rule {
        applies: |row| !row.category_mentions(&NON_VEGETARIAN_DETAIL_MARKERS),
        verdict: Verdict::with_benefit(
            100,
            "✓ Suitable for a vegetarian diet",
            "Plant-based nutrition that aligns with vegetarian principles",
        ),
    }],
    otherwise: Verdict::plain(0, "⚠ Contains non-vegetarian ingredients"),
};

const NON_VEGETARIAN: Ladder = Ladder {
    rules: &[],
    otherwise: Verdict::plain(85, "✓ Suitable for a non-vegetarian diet"),
};

const YOUTH: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.sodium <= 150.0 && row.cholesterol <= 80.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Excellent sodium and cholesterol levels for youth",
                "Optimal nutrient levels for growing bodies",
            ),
        },
        Rule {
            applies: |row| row.sodium <= 200.0 && row.cholesterol <= 100.0,
            verdict: Verdict::plain(
                75,
                "✓ Acceptable sodium and cholesterol for younger individuals",
            ),
        },
    ],
    otherwise: Verdict::plain(40, "⚠ Higher sodium/cholesterol - consume occasionally"),
};

const SENIOR: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.sodium <= 100.0 && row.sugars <= 8.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Excellent heart-friendly nutrition",
                "Very low sodium supports cardiovascular health",
            ),
        },
        Rule {
            applies: |row| row.sodium <= 150.0 && row.sugars <= 10.0,
            verdict: Verdict::plain(80, "✓ Good sodium and sugar levels for mature adults"),
        },
    ],
    otherwise: Verdict::plain(50, "⚠ Moderate sodium/sugar - watch portion sizes"),
};

const ADULT: Ladder = Ladder {
    rules: &[Rule {
        applies: |row| row.sodium <= 200.0 && row.cholesterol <= 150.0,
        verdict: Verdict::plain(90, "✓ Well-balanced for active adults"),
    }],
    otherwise: Verdict::plain(65, "✓ Suitable with mindful consumption"),
};

const UNDERWEIGHT: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.calories >= 250.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Calorie-dense food ideal for healthy weight gain",
                "High energy content supports weight increase",
            ),
        },
        Rule {
            applies: |row| row.calories >= 150.0,
            verdict: Verdict::plain(70, "✓ Moderate calories support gradual weight gain"),
        },
    ],
    otherwise: Verdict::plain(40, "⚠ Low calorie - pair with energy-rich foods"),
};

const OVERWEIGHT: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.calories <= 150.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Low calorie content excellent for weight management",
                "Calorie-controlled nutrition for healthy weight loss",
            ),
        },
        Rule {
            applies: |row| row.calories <= 250.0,
            verdict: Verdict::plain(75, "✓ Moderate calories manageable with portion control"),
        },
    ],
    otherwise: Verdict::plain(45, "⚠ Higher calories - use small portions"),
};

const HEALTHY_WEIGHT: Ladder = Ladder {
    rules: &[Rule {
        applies: |row| (150.0..=300.0).contains(&row.calories),
        verdict: Verdict::plain(95, "✓ Perfectly balanced calorie content"),
    }],
    otherwise: Verdict::plain(70, "✓ Calorie level workable with balanced meal planning"),
};

const DIABETES: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.sugars <= 3.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Very low sugar - excellent for diabetes management",
                "Minimal blood sugar impact, ideal for diabetics",
            ),
        },
        Rule {
            applies: |row| row.sugars <= 5.0,
            verdict: Verdict::with_benefit(
                80,
                "✓ Low sugar content supports blood sugar control",
                "Acceptable sugar levels for diabetes management",
            ),
        },
        Rule {
            applies: |row| row.sugars <= 10.0,
            verdict: Verdict::plain(50, "⚠ Moderate sugar - consume in small portions"),
        },
    ],
    otherwise: Verdict::plain(20, "⚠ High sugar content - not recommended"),
};

const ANEMIA: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.protein >= 8.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ High protein excellent for anemia management",
                "Rich protein supports iron absorption and blood health",
            ),
        },
        Rule {
            applies: |row| row.protein >= 5.0,
            verdict: Verdict::with_benefit(
                75,
                "✓ Good protein content supports iron-rich diet",
                "Adequate protein for blood health support",
            ),
        },
    ],
    otherwise: Verdict::plain(45, "⚠ Lower protein - pair with protein-rich foods"),
};

const HYPERTENSION: Ladder = Ladder {
    rules: &[
        Rule {
            applies: |row| row.sodium <= 100.0,
            verdict: Verdict::with_benefit(
                100,
                "✓ Very low sodium - perfect for blood pressure control",
                "Minimal sodium impact on blood pressure",
            ),
        },
        Rule {
            applies: |row| row.sodium <= 150.0,
            verdict: Verdict::plain(75, "✓ Low sodium supports hypertension management"),
        },
    ],
    otherwise: Verdict::plain(40, "⚠ Higher sodium - monitor blood pressure"),
};

/// Points awarded towards general nutritional balance.
const BALANCE_POINTS: [(fn(&FoodRecord) -> bool, u8); 4] = [
    (|row| row.protein >= 5.0, 30),
    (|row| row.sugars <= 10.0, 30),
    (|row| row.sodium <= 200.0, 25),
    (|row| row.calories >= 100.0, 15),
];

/// Balance score at which the general-wellness wording turns positive.
const BALANCED_FROM: u8 = 80;

fn balance(row: &FoodRecord) -> Verdict {
    let score = BALANCE_POINTS
        .iter()
        .filter(|(holds, _)| holds(row))
        .map(|&(_, points)| points)
        .sum();
    let explanation = if score >= BALANCED_FROM {
        "✓ Excellent nutritional balance for general wellness"
    } else {
        "✓ Suitable for general health maintenance"
    };
    Verdict::plain(score, explanation)
}

/// Verdicts for the four factors, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdicts {
    pub(crate) diet: Verdict,
    pub(crate) age: Verdict,
    pub(crate) bmi: Verdict,
    pub(crate) condition: Verdict,
}

impl Verdicts {
    pub(crate) fn evaluate(row: &FoodRecord, profile: &HealthProfile) -> Self {
        let diet = if profile.is_vegetarian() {
            &VEGETARIAN
        } else {
            &NON_VEGETARIAN
        };
        let age = match profile.age {
            0..18 => &YOUTH,
            41.. => &SENIOR,
            _ => &ADULT,
        };
        let bmi = if profile.bmi < 18.5 {
            &UNDERWEIGHT
        } else if profile.bmi >= 25.0 {
            &OVERWEIGHT
        } else {
            &HEALTHY_WEIGHT
        };
        let condition = match profile.condition_key().as_str() {
            "diabetes" => DIABETES.evaluate(row),
            "anemia" => ANEMIA.evaluate(row),
            "hypertension" => HYPERTENSION.evaluate(row),
            _ => balance(row),
        };
        Self {
            diet: diet.evaluate(row),
            age: age.evaluate(row),
            bmi: bmi.evaluate(row),
            condition,
        }
    }

    pub(crate) const fn in_order(&self) -> [Verdict; 4] {
        [self.diet, self.age, self.bmi, self.condition]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigrow_core::test_support::food;
    use rstest::rstest;

    fn with(calories: f64, protein: f64, sugars: f64, sodium: f64, cholesterol: f64) -> FoodRecord {
        food("Probe", "Snacks", [calories, protein, 10.0, sugars, sodium, cholesterol])
    }

    #[rstest]
    #[case(150.0, 80.0, 100)]
    #[case(151.0, 80.0, 75)]
    #[case(150.0, 81.0, 75)]
    #[case(200.0, 100.0, 75)]
    #[case(201.0, 0.0, 40)]
    #[case(0.0, 101.0, 40)]
    fn youth_bands(#[case] sodium: f64, #[case] cholesterol: f64, #[case] expected: u8) {
        let row = with(100.0, 5.0, 0.0, sodium, cholesterol);
        assert_eq!(YOUTH.evaluate(&row).score, expected);
    }

    #[rstest]
    #[case(100.0, 8.0, 100)]
    #[case(100.0, 8.5, 80)]
    #[case(150.0, 10.0, 80)]
    #[case(150.0, 10.5, 50)]
    #[case(151.0, 0.0, 50)]
    fn senior_bands(#[case] sodium: f64, #[case] sugars: f64, #[case] expected: u8) {
        let row = with(100.0, 5.0, sugars, sodium, 0.0);
        assert_eq!(SENIOR.evaluate(&row).score, expected);
    }

    #[rstest]
    #[case(200.0, 150.0, 90)]
    #[case(200.5, 150.0, 65)]
    #[case(10.0, 151.0, 65)]
    fn adult_bands(#[case] sodium: f64, #[case] cholesterol: f64, #[case] expected: u8) {
        let row = with(100.0, 5.0, 0.0, sodium, cholesterol);
        assert_eq!(ADULT.evaluate(&row).score, expected);
    }

    #[rstest]
    #[case(&UNDERWEIGHT, 250.0, 100)]
    #[case(&UNDERWEIGHT, 249.0, 70)]
    #[case(&UNDERWEIGHT, 150.0, 70)]
    #[case(&UNDERWEIGHT, 149.0, 40)]
    #[case(&OVERWEIGHT, 150.0, 100)]
    #[case(&OVERWEIGHT, 250.0, 75)]
    #[case(&OVERWEIGHT, 251.0, 45)]
    #[case(&HEALTHY_WEIGHT, 150.0, 95)]
    #[case(&HEALTHY_WEIGHT, 300.0, 95)]
    #[case(&HEALTHY_WEIGHT, 149.0, 70)]
    #[case(&HEALTHY_WEIGHT, 301.0, 70)]
    fn calorie_bands(#[case] ladder: &Ladder, #[case] calories: f64, #[case] expected: u8) {
        let row = with(calories, 5.0, 0.0, 0.0, 0.0);
        assert_eq!(ladder.evaluate(&row).score, expected);
    }

    #[rstest]
    #[case(3.0, 100)]
    #[case(5.0, 80)]
    #[case(10.0, 50)]
    #[case(10.1, 20)]
    fn diabetes_bands(#[case] sugars: f64, #[case] expected: u8) {
        assert_eq!(DIABETES.evaluate(&with(100.0, 5.0, sugars, 0.0, 0.0)).score, expected);
    }

    #[rstest]
    #[case(8.0, 100)]
    #[case(5.0, 75)]
    #[case(4.9, 45)]
    fn anemia_bands(#[case] protein: f64, #[case] expected: u8) {
        assert_eq!(ANEMIA.evaluate(&with(100.0, protein, 0.0, 0.0, 0.0)).score, expected);
    }

    #[rstest]
    #[case(100.0, 100)]
    #[case(150.0, 75)]
    #[case(150.1, 40)]
    fn hypertension_bands(#[case] sodium: f64, #[case] expected: u8) {
        assert_eq!(
            HYPERTENSION.evaluate(&with(100.0, 5.0, 0.0, sodium, 0.0)).score,
            expected
        );
    }

    #[rstest]
    #[case(with(100.0, 5.0, 10.0, 200.0, 0.0), 100, "✓ Excellent nutritional balance for general wellness")]
    #[case(with(99.0, 5.0, 10.0, 200.0, 0.0), 85, "✓ Excellent nutritional balance for general wellness")]
    #[case(with(99.0, 5.0, 10.0, 201.0, 0.0), 60, "✓ Suitable for general health maintenance")]
    #[case(with(50.0, 1.0, 20.0, 500.0, 0.0), 0, "✓ Suitable for general health maintenance")]
    fn balance_points_add_up(
        #[case] row: FoodRecord,
        #[case] expected: u8,
        #[case] explanation: &str,
    ) {
        let verdict = balance(&row);
        assert_eq!(verdict.score, expected);
        assert_eq!(verdict.explanation, explanation);
    }

    #[rstest]
    #[case("Egg Dishes", 0)]
    #[case("Seafood & Fish", 0)]
    #[case("Legumes", 100)]
    fn vegetarian_detail_rule_also_excludes_eggs(#[case] category: &str, #[case] expected: u8) {
        let row = food("Probe", category, [100.0, 5.0, 10.0, 1.0, 10.0, 0.0]);
        assert_eq!(VEGETARIAN.evaluate(&row).score, expected);
    }

    #[rstest]
    #[case(17, 40)]
    #[case(18, 65)]
    #[case(40, 65)]
    #[case(41, 50)]
    fn age_selects_the_ladder(#[case] age: u32, #[case] expected: u8) {
        let row = with(100.0, 5.0, 20.0, 400.0, 200.0);
        let profile = HealthProfile {
            age,
            bmi: 21.0,
            condition: "none".into(),
            diet: "vegetarian".into(),
        };
        assert_eq!(Verdicts::evaluate(&row, &profile).age.score, expected);
    }
}
