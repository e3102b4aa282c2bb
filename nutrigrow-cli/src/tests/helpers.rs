//! Temporary workspaces holding datasets and request files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

const CROP_CSV: &str = "\
Temperature,Humidity,Moisture,Soil Type,Crop Type,Nitrogen,Phosphorous,Potassium
26,52,38,Sandy,Maize,37,0,0
29,52,45,Loamy,Sugarcane,12,0,36
34,65,62,Black,Cotton,7,9,30
32,62,34,Red,Tobacco,22,0,20
28,54,46,Clayey,Paddy,35,0,0
26,52,35,Sandy,Barley,12,10,13
25,50,64,Loamy,Wheat,50,40,45
33,64,50,Black,Millets,41,0,0
30,60,42,Red,Oil seeds,21,18,0
29,58,40,Clayey,Pulses,9,30,10
31,62,48,Loamy,Ground Nuts,10,13,14
";

const FOOD_CSV: &str = "\
Food_Item,Category,Calories (kcal),Protein (g),Carbohydrates (g),Sugars (g),Sodium (mg),Cholesterol (mg),Meal_Type
Lentil Soup,Soups,116,9,20,1.8,120,0,Lunch
Grilled Chicken,Chicken Dishes,165,31,0,0,74,85,Dinner
Spinach Dal,Legumes,180,11,24,2,90,0,Lunch
Fish Curry,Fish,210,22,6,3,310,60,Dinner
Fruit Salad,Desserts,90,1,22,18,5,0,Snack
Paneer Tikka,Dairy,260,18,6,4,180,60,Dinner
Vegetable Pulao,Rice Dishes,240,5,42,3,140,0,Lunch
Tofu Stir Fry,,150,12,8,3,95,0,Dinner
";

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let payload = serde_json::to_string(value).expect("encode json");
        self.write(name, &payload)
    }

    pub(super) fn crop_dataset(&self) -> Utf8PathBuf {
        self.write("farmer_data.csv", CROP_CSV)
    }

    /// Crop dataset with an unparseable row right after the header.
    pub(super) fn crop_dataset_with_bad_row(&self) -> Utf8PathBuf {
        let (header, rows) = CROP_CSV.split_once('\n').expect("header line");
        let contents = format!("{header}\nabc,60,45,Loamy,Rice,50,40,45\n{rows}");
        self.write("farmer_data.csv", &contents)
    }

    pub(super) fn food_dataset(&self) -> Utf8PathBuf {
        self.write("consumer_data.csv", FOOD_CSV)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

/// Decode what a command wrote, checking the trailing newline.
pub(super) fn decode_output(output: &[u8]) -> Value {
    let text = std::str::from_utf8(output).expect("utf-8 output");
    assert!(text.ends_with("}\n"), "unexpected output framing: {text:?}");
    serde_json::from_str(text).expect("json output")
}
