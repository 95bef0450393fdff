use advisor_common::api::{HealthStatus, LeafAnalysis};
use rand::Rng;

/// Source of leaf diagnoses for uploaded images.
///
/// The production implementation is an explicit mock; the trait seam exists
/// so a real classifier can slot in later and so tests can pin the result.
pub trait DiagnosisProvider: Send + Sync {
    fn diagnose(&self) -> LeafAnalysis;
}

const CANNED_RESULTS: [(HealthStatus, &str, &str); 3] = [
    (HealthStatus::Healthy, "None", "Continue standard care."),
    (HealthStatus::Diseased, "Leaf Spot", "Apply Fungicide X."),
    (HealthStatus::Diseased, "Yellow Rust", "Spray Nitrogen supplement."),
];

/// Picks one of the canned results uniformly at random on each call.
pub struct CannedDiagnosis;

impl DiagnosisProvider for CannedDiagnosis {
    fn diagnose(&self) -> LeafAnalysis {
        let idx = rand::thread_rng().gen_range(0..CANNED_RESULTS.len());
        canned(idx)
    }
}

fn canned(idx: usize) -> LeafAnalysis {
    let (status, disease, remedy) = CANNED_RESULTS[idx];
    LeafAnalysis {
        status,
        disease: disease.to_string(),
        remedy: remedy.to_string(),
    }
}

/// Deterministic provider for tests: always returns the canned result at the
/// given index.
#[cfg(test)]
pub struct FixedDiagnosis(pub usize);

#[cfg(test)]
impl DiagnosisProvider for FixedDiagnosis {
    fn diagnose(&self) -> LeafAnalysis {
        canned(self.0 % CANNED_RESULTS.len())
    }
}
