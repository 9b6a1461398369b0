//! Classifier contract and class label table
//!
//! The service treats the model as a black box: anything implementing
//! [`Classifier`] can back the HTTP surface. The concrete artifact shipped
//! with the crate is [`NearestCentroidClassifier`].

mod centroid;

pub use centroid::NearestCentroidClassifier;

use crate::error::{IrisError, Result};

/// Number of measurements per sample: sepal length, sepal width,
/// petal length, petal width.
pub const NUM_FEATURES: usize = 4;

/// A single input sample, positions fixed by the Iris dataset convention.
pub type FeatureVector = [f64; NUM_FEATURES];

/// Human-readable names, index-aligned with the model's output domain.
pub const CLASS_LABELS: [&str; 3] = ["Iris-setosa", "Iris-versicolor", "Iris-virginica"];

/// Resolve a class index to its label. Fails when the model emits an index
/// outside the known label range.
pub fn class_label(index: usize) -> Result<&'static str> {
    CLASS_LABELS.get(index).copied().ok_or(IrisError::ClassOutOfRange {
        index,
        classes: CLASS_LABELS.len(),
    })
}

/// An opaque classification model: a fixed-length numeric vector in, a class
/// index out. Implementations must be safe to share across request handlers.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<usize>;
}
