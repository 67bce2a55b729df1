use std::fmt;

use crate::gender::Gender;

/// Physiological inputs of a single prediction request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub gender: Gender,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
}

/// Model input assembled from [`Measurements`].
///
/// Column order must match the order the predictor artifact was trained
/// with, see [`FeatureVector::COLUMNS`].
#[derive(Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FeatureVector::LEN]);

impl FeatureVector {
    pub const LEN: usize = 7;
    pub const COLUMNS: [&'static str; FeatureVector::LEN] = [
        "Gender",
        "Age",
        "Height",
        "Weight",
        "Duration",
        "Heart_Rate",
        "Body_Temp",
    ];

    pub fn as_array(&self) -> &[f64; FeatureVector::LEN] {
        &self.0
    }

    pub fn to_f32_array(&self) -> [f32; FeatureVector::LEN] {
        self.0.map(|x| x as f32)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::COLUMNS.into_iter().zip(self.0.iter().copied())
    }
}

impl From<&Measurements> for FeatureVector {
    fn from(m: &Measurements) -> Self {
        Self([
            u8::from(m.gender) as f64,
            m.age,
            m.height,
            m.weight,
            m.duration,
            m.heart_rate,
            m.body_temp,
        ])
    }
}

impl From<[f64; FeatureVector::LEN]> for FeatureVector {
    fn from(values: [f64; FeatureVector::LEN]) -> Self {
        Self(values)
    }
}

impl fmt::Debug for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.columns()).finish()
    }
}
