//! The fixed crop reference set consulted by the recommendation engine.
//!
//! Built once at startup and shared read-only for the life of the process;
//! nothing writes to it after that, so no synchronization is needed.

use std::collections::HashSet;

use crate::error::AppError;
use crate::model::CropProfile;

pub struct Catalog {
    crops: Vec<CropProfile>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            crops: vec![
                profile(
                    "Wheat",
                    &["loam", "clay"],
                    "rabi",
                    5000.0,
                    "Requires cool climate. Good for North India.",
                ),
                profile(
                    "Rice",
                    &["clay", "loam"],
                    "kharif",
                    8000.0,
                    "High water requirement. Ideal for heavy rain areas.",
                ),
                profile(
                    "Cotton",
                    &["black"],
                    "kharif",
                    10000.0,
                    "Cash crop. Best in black soil regions.",
                ),
                profile(
                    "Maize",
                    &["loam", "sandy"],
                    "kharif",
                    4000.0,
                    "Versatile crop. Good fodder and food.",
                ),
                profile(
                    "Mustard",
                    &["sandy", "loam"],
                    "rabi",
                    3000.0,
                    "Low water needed. High oil content.",
                ),
                profile(
                    "Watermelon",
                    &["sandy"],
                    "zaid",
                    5000.0,
                    "Summer crop. High profit potential.",
                ),
                profile(
                    "Soybean",
                    &["loam", "black"],
                    "kharif",
                    6000.0,
                    "Nitrogen-fixing. Improves soil health.",
                ),
                profile(
                    "Sugarcane",
                    &["loam", "clay"],
                    "kharif",
                    15000.0,
                    "Long duration crop. High water need.",
                ),
                profile(
                    "Barley",
                    &["sandy", "loam"],
                    "rabi",
                    3500.0,
                    "Drought tolerant. Good for saline soil.",
                ),
            ],
        }
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Startup check: names unique, soils non-empty, budgets non-negative,
    /// catalog non-empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.crops.is_empty() {
            return Err(AppError::Catalog("catalog has no crops".to_string()));
        }

        let mut names: HashSet<&str> = HashSet::new();
        for crop in &self.crops {
            if !names.insert(&crop.name) {
                return Err(AppError::Catalog(format!("duplicate crop name: {}", crop.name)));
            }
            if crop.soils.is_empty() {
                return Err(AppError::Catalog(format!("{} has no compatible soils", crop.name)));
            }
            if !crop.min_budget.is_finite() || crop.min_budget < 0.0 {
                return Err(AppError::Catalog(format!(
                    "{} has invalid minimum budget: {}",
                    crop.name, crop.min_budget
                )));
            }
        }
        Ok(())
    }
}

fn profile(name: &str, soils: &[&str], season: &str, min_budget: f64, details: &str) -> CropProfile {
    CropProfile {
        name: name.to_string(),
        soils: soils.iter().map(|s| s.to_string()).collect(),
        season: season.to_string(),
        min_budget,
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        Catalog::builtin().validate().expect("catalog invariants hold");
    }

    #[test]
    fn builtin_catalog_has_all_nine_crops_in_declaration_order() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.crops().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Wheat",
                "Rice",
                "Cotton",
                "Maize",
                "Mustard",
                "Watermelon",
                "Soybean",
                "Sugarcane",
                "Barley",
            ]
        );
    }

    #[test]
    fn validation_rejects_degenerate_profiles() {
        let mut catalog = Catalog::builtin();
        catalog.crops[0].soils.clear();
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog.crops[2].min_budget = -1.0;
        assert!(catalog.validate().is_err());

        let mut catalog = Catalog::builtin();
        catalog.crops[1].name = "Wheat".to_string();
        assert!(catalog.validate().is_err());
    }
}
