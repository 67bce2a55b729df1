use std::{fs, path::Path, str::FromStr};

use calorie_model::measurement::FeatureVector;
use serde::Deserialize;

use crate::{read_error, Error, Predictor, Result};

/// One weight per feature column.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Coefficients {
    pub gender: f64,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
}

impl Coefficients {
    fn in_column_order(&self) -> [f64; FeatureVector::LEN] {
        [
            self.gender,
            self.age,
            self.height,
            self.weight,
            self.duration,
            self.heart_rate,
            self.body_temp,
        ]
    }
}

/// Linear regression stored as a RON document:
///
/// ```ron
/// (
///     intercept: -4.5,
///     coefficients: (gender: 0.0, age: 0.5, height: 0.0, weight: 0.3,
///                    duration: 6.6, heart_rate: 2.0, body_temp: -1.0),
/// )
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinearPredictor {
    pub intercept: f64,
    pub coefficients: Coefficients,
}

impl LinearPredictor {
    pub fn from_file(path: &Path) -> Result<Self> {
        fs::read_to_string(path)
            .map_err(read_error(path))?
            .parse()
    }
}

impl FromStr for LinearPredictor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok(self.intercept
            + self
                .coefficients
                .in_column_order()
                .iter()
                .zip(features.as_array())
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}
