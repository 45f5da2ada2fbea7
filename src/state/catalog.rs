use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use strsim::jaro_winkler;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{FoodCategory, FoodItem};

/// Default page size for catalog listings.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Filter and paging for [`FoodCatalog::list_foods`].
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuery {
    /// Case-insensitive substring of the name or category.
    pub search: Option<String>,
    pub category: Option<FoodCategory>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for FoodQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// Read-only list of foods, numbered and deduplicated by name.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Builds a catalog from raw items.
    ///
    /// Invalid items are dropped, duplicates by lowercase name keep the last
    /// occurrence, and a repeated id stays with its first holder. Items
    /// without an id, or with a repeated one, are numbered after the highest
    /// id in use, wrapping to the lowest free id past `u32::MAX`.
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut foods: Vec<FoodItem> = Vec::with_capacity(items.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for item in items {
            if !item.is_valid() {
                warn!(name = %item.name, "skipping invalid catalog item");
                continue;
            }
            match index.get(&item.key()) {
                Some(&pos) => foods[pos] = item,
                None => {
                    index.insert(item.key(), foods.len());
                    foods.push(item);
                }
            }
        }

        let mut used: HashSet<u32> = HashSet::with_capacity(foods.len());
        for food in foods.iter_mut() {
            if food.id != 0 && !used.insert(food.id) {
                warn!(id = food.id, name = %food.name, "duplicate catalog id, renumbering");
                food.id = 0;
            }
        }

        let mut last_id = used.iter().copied().max().unwrap_or(0);
        for food in foods.iter_mut().filter(|f| f.id == 0) {
            last_id = next_free_id(&used, last_id);
            used.insert(last_id);
            food.id = last_id;
        }

        Self { foods }
    }

    /// The built-in starter catalog.
    pub fn seeded() -> Self {
        Self::new(seed_foods())
    }

    /// Loads a catalog from a `.csv` or `.json` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let items: Vec<FoodItem> = if is_csv {
            let mut reader = csv::Reader::from_path(path)?;
            reader
                .deserialize()
                .collect::<std::result::Result<Vec<FoodItem>, csv::Error>>()?
        } else {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        };

        let catalog = Self::new(items);
        info!(path = %path.display(), foods = catalog.len(), "loaded food catalog");
        Ok(catalog)
    }

    /// Active foods matching the query, sorted by name, then paged.
    pub fn list_foods(&self, query: &FoodQuery) -> Vec<&FoodItem> {
        let mut matches: Vec<&FoodItem> = self
            .foods
            .iter()
            .filter(|f| f.active)
            .filter(|f| query.category.is_none_or(|c| f.category == c))
            .filter(|f| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|term| f.matches_search(term.trim()))
            })
            .collect();

        matches.sort_by_key(|f| f.key());
        matches
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect()
    }

    /// Distinct categories of active foods, sorted by display name.
    pub fn categories(&self) -> Vec<FoodCategory> {
        let names: BTreeSet<&'static str> = self
            .foods
            .iter()
            .filter(|f| f.active)
            .map(|f| f.category.as_str())
            .collect();
        names
            .into_iter()
            .filter_map(FoodCategory::from_label)
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Exact, case-insensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        let key = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.active && f.key() == key)
    }

    /// Active foods whose name is similar to `term`, best match first.
    pub fn fuzzy_matches(&self, term: &str) -> Vec<(&FoodItem, f64)> {
        let term = term.trim().to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .filter(|f| f.active)
            .map(|f| (f, jaro_winkler(&f.key(), &term)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    name: &str,
    category: FoodCategory,
    calories: f64,
    [carbs, protein, fat, fiber]: [f64; 4],
    [sodium, potassium, calcium, iron]: [f64; 4],
    [vitamin_c, vitamin_a, omega3]: [f64; 3],
    notes: &str,
) -> FoodItem {
    FoodItem {
        id: 0,
        name: name.to_string(),
        category,
        calories,
        carbs,
        protein,
        fat,
        fiber,
        sodium,
        potassium,
        calcium,
        iron,
        vitamin_c,
        vitamin_a,
        omega3,
        serving_size: "100g".to_string(),
        notes: Some(notes.to_string()),
        active: true,
    }
}

/// First id after `after` not in `used`, skipping 0.
fn next_free_id(used: &HashSet<u32>, after: u32) -> u32 {
    let mut id = after;
    loop {
        id = id.checked_add(1).unwrap_or(1);
        if !used.contains(&id) {
            return id;
        }
    }
}

/// Starter foods, per 100 g.
pub fn seed_foods() -> Vec<FoodItem> {
    use FoodCategory::*;

    vec![
        seed(
            "Brown Rice (cooked)",
            WholeGrains,
            111.0,
            [23.0, 2.6, 0.9, 1.8],
            [5.0, 43.0, 10.0, 0.4],
            [0.0, 0.0, 0.0],
            "Good source of complex carbohydrates and fiber",
        ),
        seed(
            "Chicken Breast (skinless, cooked)",
            LeanProtein,
            165.0,
            [0.0, 31.0, 3.6, 0.0],
            [74.0, 256.0, 15.0, 1.0],
            [0.0, 0.0, 0.0],
            "Excellent source of complete protein",
        ),
        seed(
            "Broccoli (cooked)",
            Vegetables,
            35.0,
            [7.0, 2.4, 0.4, 3.3],
            [41.0, 293.0, 40.0, 0.7],
            [65.0, 0.0, 0.0],
            "High in vitamin C, fiber, and antioxidants",
        ),
        seed(
            "Sweet Potato (baked)",
            StarchyVegetables,
            90.0,
            [21.0, 2.0, 0.1, 3.3],
            [6.0, 475.0, 38.0, 0.7],
            [0.0, 961.0, 0.0],
            "Rich in beta-carotene and potassium",
        ),
        seed(
            "Salmon (Atlantic, cooked)",
            FattyFish,
            206.0,
            [0.0, 22.0, 12.0, 0.0],
            [59.0, 363.0, 13.0, 0.8],
            [0.0, 0.0, 1.8],
            "Excellent source of omega-3 fatty acids",
        ),
        seed(
            "Quinoa (cooked)",
            WholeGrains,
            120.0,
            [22.0, 4.4, 1.9, 2.8],
            [7.0, 172.0, 17.0, 1.5],
            [0.0, 0.0, 0.0],
            "Complete protein grain, gluten-free",
        ),
        seed(
            "Greek Yogurt (plain, non-fat)",
            Dairy,
            59.0,
            [3.6, 10.0, 0.4, 0.0],
            [36.0, 141.0, 110.0, 0.1],
            [0.0, 0.0, 0.0],
            "High protein, probiotic benefits",
        ),
        seed(
            "Avocado",
            HealthyFats,
            160.0,
            [9.0, 2.0, 15.0, 7.0],
            [7.0, 485.0, 12.0, 0.6],
            [10.0, 0.0, 0.0],
            "Rich in monounsaturated fats and fiber",
        ),
        seed(
            "Spinach (fresh)",
            LeafyGreens,
            23.0,
            [3.6, 2.9, 0.4, 2.2],
            [79.0, 558.0, 99.0, 2.7],
            [28.0, 469.0, 0.0],
            "High in iron, folate, and antioxidants",
        ),
        seed(
            "Lentils (cooked)",
            Legumes,
            116.0,
            [20.0, 9.0, 0.4, 7.9],
            [238.0, 369.0, 19.0, 3.3],
            [0.0, 0.0, 0.0],
            "High protein legume, excellent fiber source",
        ),
        seed(
            "Apple (medium)",
            Fruits,
            52.0,
            [14.0, 0.3, 0.2, 2.4],
            [1.0, 107.0, 6.0, 0.1],
            [5.0, 0.0, 0.0],
            "Good source of fiber and natural sugars",
        ),
        seed(
            "Almonds (raw)",
            HealthyFats,
            579.0,
            [22.0, 21.0, 50.0, 12.0],
            [1.0, 733.0, 269.0, 3.7],
            [0.0, 0.0, 0.0],
            "High in healthy fats, protein, and vitamin E",
        ),
    ]
}
