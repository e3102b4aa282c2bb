//! Row builders, sample tables and a scripted completion backend shared by
//! unit and behaviour tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{CompletionError, CropRecord, CropTable, FoodRecord, FoodTable, TextCompletion};

/// Build a crop row.
///
/// `climate` holds temperature, humidity and moisture; `npk` holds
/// nitrogen, phosphorous and potassium.
#[must_use]
pub fn crop(crop_type: &str, soil_type: &str, climate: [f64; 3], npk: [f64; 3]) -> CropRecord {
    let [temperature, humidity, moisture] = climate;
    let [nitrogen, phosphorous, potassium] = npk;
    CropRecord {
        temperature,
        humidity,
        moisture,
        soil_type: soil_type.to_owned(),
        nitrogen,
        phosphorous,
        potassium,
        crop_type: crop_type.to_owned(),
    }
}

/// Build a food row.
///
/// `nutrients` holds calories, protein, carbohydrates, sugars, sodium and
/// cholesterol in that order.
#[must_use]
pub fn food(food_item: &str, category: &str, nutrients: [f64; 6]) -> FoodRecord {
    let [calories, protein, carbohydrates, sugars, sodium, cholesterol] = nutrients;
    FoodRecord {
        food_item: food_item.to_owned(),
        category: category.to_owned(),
        calories,
        protein,
        carbohydrates,
        sugars,
        sodium,
        cholesterol,
    }
}

/// A small crop table spanning cereals, pulses, oilseeds and cash crops.
#[must_use]
pub fn sample_crop_table() -> CropTable {
    CropTable::new(vec![
        crop("Maize", "Sandy", [26.0, 52.0, 38.0], [37.0, 0.0, 0.0]),
        crop("Sugarcane", "Loamy", [29.0, 52.0, 45.0], [12.0, 0.0, 36.0]),
        crop("Cotton", "Black", [34.0, 65.0, 62.0], [7.0, 9.0, 30.0]),
        crop("Tobacco", "Red", [32.0, 62.0, 34.0], [22.0, 0.0, 20.0]),
        crop("Paddy", "Clayey", [28.0, 54.0, 46.0], [35.0, 0.0, 0.0]),
        crop("Barley", "Sandy", [26.0, 52.0, 35.0], [12.0, 10.0, 13.0]),
        crop("Wheat", "Loamy", [25.0, 50.0, 64.0], [50.0, 40.0, 45.0]),
        crop("Millets", "Black", [33.0, 64.0, 50.0], [41.0, 0.0, 0.0]),
        crop("Oil seeds", "Red", [30.0, 60.0, 42.0], [21.0, 18.0, 0.0]),
        crop("Pulses", "Clayey", [29.0, 58.0, 40.0], [9.0, 30.0, 10.0]),
        crop("Ground Nuts", "Loamy", [31.0, 62.0, 48.0], [10.0, 13.0, 14.0]),
    ])
}

/// A small food table mixing vegetarian and non-vegetarian items.
#[must_use]
pub fn sample_food_table() -> FoodTable {
    FoodTable::new(vec![
        food("Lentil Soup", "Soups", [116.0, 9.0, 20.0, 1.8, 120.0, 0.0]),
        food("Grilled Chicken", "Chicken Dishes", [165.0, 31.0, 0.0, 0.0, 74.0, 85.0]),
        food("Spinach Dal", "Legumes", [180.0, 11.0, 24.0, 2.0, 90.0, 0.0]),
        food("Fish Curry", "Fish", [210.0, 22.0, 6.0, 3.0, 310.0, 60.0]),
        food("Fruit Salad", "Desserts", [90.0, 1.0, 22.0, 18.0, 5.0, 0.0]),
        food("Paneer Tikka", "Dairy", [260.0, 18.0, 6.0, 4.0, 180.0, 60.0]),
        food("Vegetable Pulao", "Rice Dishes", [240.0, 5.0, 42.0, 3.0, 140.0, 0.0]),
        food("Tofu Stir Fry", "", [150.0, 12.0, 8.0, 3.0, 95.0, 0.0]),
    ])
}

/// Completion backend replaying queued responses in order.
///
/// Every prompt is recorded so tests can assert on what was asked. Once the
/// queue is drained each call fails with [`CompletionError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    responses: Mutex<VecDeque<Result<String, CompletionError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    /// Queue `responses` to be returned one per call.
    #[must_use]
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Result<String, CompletionError>>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Convenience constructor queuing successful replies.
    #[must_use]
    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(replies.into_iter().map(|reply| Ok(reply.into())))
    }

    /// Prompts received so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl TextCompletion for ScriptedCompletion {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_owned());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(Err(CompletionError::Unavailable))
    }
}
