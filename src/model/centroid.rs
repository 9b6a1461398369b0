//! Nearest-centroid classifier artifact
//!
//! One centroid per class; classification returns the index of the centroid
//! with the smallest squared Euclidean distance to the input. The artifact is
//! stored on disk as pretty-printed JSON so it can be inspected and swapped
//! without recompiling.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{IrisError, Result};
use crate::model::{Classifier, FeatureVector, NUM_FEATURES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestCentroidClassifier {
    /// Per-class mean vectors; row index is the class index.
    centroids: Vec<Vec<f64>>,
}

impl NearestCentroidClassifier {
    pub fn new(centroids: Vec<Vec<f64>>) -> Result<Self> {
        if centroids.is_empty() {
            return Err(IrisError::EmptyModel);
        }
        for centroid in &centroids {
            if centroid.len() != NUM_FEATURES {
                return Err(IrisError::FeatureDimension {
                    expected: NUM_FEATURES,
                    got: centroid.len(),
                });
            }
        }
        Ok(Self { centroids })
    }

    /// The built-in default: per-class mean vectors of the Iris dataset,
    /// ordered setosa, versicolor, virginica.
    pub fn iris_default() -> Self {
        Self {
            centroids: vec![
                vec![5.006, 3.428, 1.462, 0.246],
                vec![5.936, 2.770, 4.260, 1.326],
                vec![6.588, 2.974, 5.552, 2.026],
            ],
        }
    }

    pub fn num_classes(&self) -> usize {
        self.centroids.len()
    }

    /// Save the classifier to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a classifier from a file
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&json)?;
        // Re-validate: the file may have been edited by hand.
        Self::new(model.centroids)
    }
}

impl Classifier for NearestCentroidClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<usize> {
        let x = Array1::from_iter(features.iter().copied());

        let mut best = 0usize;
        let mut best_dist = f64::INFINITY;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let c = Array1::from_iter(centroid.iter().copied());
            let diff = &x - &c;
            let dist = diff.dot(&diff);
            if dist < best_dist {
                best_dist = dist;
                best = index;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classifies_known_samples() {
        let model = NearestCentroidClassifier::iris_default();
        // Canonical setosa sample
        assert_eq!(model.classify(&[5.1, 3.5, 1.4, 0.2]).unwrap(), 0);
        // Canonical virginica sample
        assert_eq!(model.classify(&[6.3, 3.3, 6.0, 2.5]).unwrap(), 2);
    }

    #[test]
    fn test_rejects_wrong_centroid_width() {
        let err = NearestCentroidClassifier::new(vec![vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, IrisError::FeatureDimension { expected: 4, got: 2 }));
    }

    #[test]
    fn test_rejects_empty_model() {
        let err = NearestCentroidClassifier::new(vec![]).unwrap_err();
        assert!(matches!(err, IrisError::EmptyModel));
    }
}
