use serde::{Deserialize, Serialize};

use advisor_common::api::RecommendRequest;

/// One crop in the reference catalog. Entries are immutable: advisory clauses
/// are appended to a copy of `details`, never to the profile itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub soils: Vec<String>,
    pub season: String,
    pub min_budget: f64,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSuggestion {
    pub name: String,
    pub details: String,
}

/// A normalized advisory query, valid for one request.
///
/// `soil`/`season` of `None` mean "no constraint": the wire tokens "" and
/// "all" and an absent field all land here, so the engine never compares
/// against a sentinel string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisoryQuery {
    pub soil: Option<String>,
    pub season: Option<String>,
    pub budget: f64,
    pub location: Option<String>,
    pub prev_crop: Option<String>,
}

impl AdvisoryQuery {
    pub fn from_request(request: &RecommendRequest) -> Self {
        Self {
            soil: normalize_tag(request.soil.as_deref()),
            season: normalize_tag(request.season.as_deref()),
            budget: request.budget,
            location: normalize_text(request.location.as_deref()),
            prev_crop: normalize_text(request.prev_crop.as_deref()),
        }
    }
}

/// Lowercase a filter tag; ""/"all"/absent become "no constraint".
fn normalize_tag(raw: Option<&str>) -> Option<String> {
    let tag = raw?.trim().to_lowercase();
    if tag.is_empty() || tag == "all" {
        None
    } else {
        Some(tag)
    }
}

fn normalize_text(raw: Option<&str>) -> Option<String> {
    let text = raw?.trim().to_lowercase();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
