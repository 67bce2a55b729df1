use calorie_model::{gender::Gender, measurement::Measurements};
use serde::Deserialize;

use crate::error::ApiError;

/// Fields posted by the input form. Everything arrives as text and is
/// converted by [`PredictForm::into_measurements`].
#[derive(Debug, Default, Deserialize)]
pub struct PredictForm {
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub duration: Option<String>,
    pub heart_rate: Option<String>,
    pub body_temp: Option<String>,
    pub gen: Option<String>,
}

impl PredictForm {
    /// Numbers are converted before gender is looked at, so a bad number
    /// is reported even when the gender is invalid too.
    pub fn into_measurements(self) -> Result<Measurements, ApiError> {
        let age = parse_number("age", self.age)?;
        let height = parse_number("height", self.height)?;
        let weight = parse_number("weight", self.weight)?;
        let duration = parse_number("duration", self.duration)?;
        let heart_rate = parse_number("heart_rate", self.heart_rate)?;
        let body_temp = parse_number("body_temp", self.body_temp)?;
        let gender = self
            .gen
            .ok_or(ApiError::MissingField("gen"))?
            .parse::<Gender>()
            .map_err(|_| ApiError::InvalidGender)?;

        Ok(Measurements {
            gender,
            age,
            height,
            weight,
            duration,
            heart_rate,
            body_temp,
        })
    }
}

fn parse_number(field: &'static str, value: Option<String>) -> Result<f64, ApiError> {
    value
        .ok_or(ApiError::MissingField(field))?
        .trim()
        .parse()
        .map_err(|source| ApiError::InvalidNumber { field, source })
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationForm {
    pub calories: Option<String>,
}

impl RecommendationForm {
    /// Missing or unreadable values count as zero calories.
    pub fn calories(&self) -> f64 {
        self.calories
            .as_deref()
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|calories| !calories.is_nan())
            .unwrap_or(0.0)
    }
}
