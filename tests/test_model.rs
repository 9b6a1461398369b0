//! Integration test: Model artifact loading and classification

use iris_serve::model::{class_label, Classifier, NearestCentroidClassifier, CLASS_LABELS};

#[test]
fn test_artifact_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris_model.json");
    let path = path.to_str().unwrap();

    let model = NearestCentroidClassifier::iris_default();
    model.save(path).unwrap();

    let loaded = NearestCentroidClassifier::load(path).unwrap();
    assert_eq!(loaded.num_classes(), CLASS_LABELS.len());

    let sample = [5.1, 3.5, 1.4, 0.2];
    assert_eq!(
        loaded.classify(&sample).unwrap(),
        model.classify(&sample).unwrap()
    );
}

#[test]
fn test_load_missing_file_fails() {
    assert!(NearestCentroidClassifier::load("/nonexistent/iris_model.json").is_err());
}

#[test]
fn test_load_rejects_malformed_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"centroids": [[1.0, 2.0]]}"#).unwrap();
    assert!(NearestCentroidClassifier::load(path.to_str().unwrap()).is_err());
}

#[test]
fn test_classification_is_deterministic() {
    let model = NearestCentroidClassifier::iris_default();
    let sample = [6.1, 2.8, 4.7, 1.2];
    let first = model.classify(&sample).unwrap();
    for _ in 0..10 {
        assert_eq!(model.classify(&sample).unwrap(), first);
    }
}

#[test]
fn test_every_default_class_is_labelable() {
    let model = NearestCentroidClassifier::iris_default();
    for sample in [
        [5.0, 3.4, 1.5, 0.2],
        [5.9, 2.8, 4.2, 1.3],
        [6.5, 3.0, 5.5, 2.0],
    ] {
        let index = model.classify(&sample).unwrap();
        assert!(class_label(index).is_ok());
    }
}
