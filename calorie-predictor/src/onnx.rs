use std::{fs::File, path::Path};

use calorie_model::measurement::FeatureVector;
use log::debug;
use tract_onnx::prelude::*;

use crate::{read_error, Error, Predictor, Result};

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

impl From<TractError> for Error {
    fn from(e: TractError) -> Self {
        Error::Model(format!("{:#}", e))
    }
}

/// Regression graph exported to ONNX, taking a single `f32 [1, 7]` input.
pub struct OnnxPredictor {
    plan: Plan,
}

impl OnnxPredictor {
    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(read_error(path))?;
        let plan = tract_onnx::onnx()
            .model_for_read(&mut file)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FeatureVector::LEN)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        let input = Tensor::from_shape(&[1, FeatureVector::LEN], &features.to_f32_array())?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        first_value(&outputs)
    }
}

/// First element of the first graph output, cast to `f32` whatever type
/// the graph was exported with.
fn first_value(outputs: &[TValue]) -> Result<f64> {
    let output = outputs.first().ok_or(Error::EmptyOutput)?.cast_to::<f32>()?;
    debug!("Model output shape {:?}", output.shape());

    output
        .as_slice::<f32>()?
        .first()
        .map(|calories| *calories as f64)
        .ok_or(Error::EmptyOutput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_element() {
        let outputs: TVec<TValue> = tvec!(tensor2(&[[231.5_f32, 7.0]]).into());

        assert_eq!(first_value(&outputs).unwrap(), 231.5);
    }

    #[test]
    fn casts_double_outputs() {
        let outputs: TVec<TValue> = tvec!(tensor2(&[[412.25_f64]]).into());

        assert_eq!(first_value(&outputs).unwrap(), 412.25);
    }

    #[test]
    fn empty_output_is_an_error() {
        let test_data: [TVec<TValue>; 2] = [
            tvec!(),
            tvec!(Tensor::zero::<f32>(&[1, 0]).unwrap().into()),
        ];

        for (i, outputs) in test_data.into_iter().enumerate() {
            assert!(
                matches!(first_value(&outputs), Err(Error::EmptyOutput)),
                "Test case #{}",
                i
            );
        }
    }
}
