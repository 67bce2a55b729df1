use std::path::Path;

use calorie_model::measurement::FeatureVector;
use calorie_predictor::{OnnxPredictor, Predictor};

// MatMul + Add graph: weights [10, 0.5, 0, 0.25, 2, 1, -1], bias 5.
const LINEAR_GRAPH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/linear.onnx");

#[test]
fn predicts_with_linear_graph() {
    let predictor = OnnxPredictor::load(Path::new(LINEAR_GRAPH)).unwrap();
    let test_data = [
        ([0.0, 25.0, 175.0, 70.0, 30.0, 120.0, 39.0], 176.0),
        ([1.0, 25.0, 175.0, 70.0, 30.0, 120.0, 39.0], 186.0),
        ([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 5.0),
    ];

    for (i, (features, expected_output)) in test_data.into_iter().enumerate() {
        assert_eq!(
            predictor.predict(&FeatureVector::from(features)).unwrap(),
            expected_output,
            "Test case #{}",
            i
        );
    }
}

#[test]
fn loads_graph_by_extension() {
    let predictor = calorie_predictor::load(LINEAR_GRAPH).unwrap();
    let features = FeatureVector::from([0.0, 25.0, 175.0, 70.0, 30.0, 120.0, 39.0]);

    let first = predictor.predict(&features).unwrap();
    let second = predictor.predict(&features).unwrap();

    assert_eq!(first, 176.0);
    assert_eq!(first, second);
}
