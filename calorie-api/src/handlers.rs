use actix_web::{get, http::header::ContentType, post, web, HttpResponse};
use calorie_model::{measurement::FeatureVector, recommendation::Recommendation};
use calorie_predictor::Predictor;
use log::{debug, info};

use crate::{
    error::ApiError,
    forms::{PredictForm, RecommendationForm},
    pages,
};

fn html(body: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body.into())
}

#[get("/")]
pub async fn index() -> HttpResponse {
    html(pages::index())
}

#[post("/predict")]
pub async fn predict(
    predictor: web::Data<dyn Predictor>,
    form: web::Form<PredictForm>,
) -> Result<HttpResponse, ApiError> {
    let measurements = form.into_inner().into_measurements()?;
    let features = FeatureVector::from(&measurements);
    debug!("Predicting from {:?}", features);

    let calories = web::block(move || predictor.predict(&features)).await??;
    info!("Estimated {:.2} calories burned", calories);

    Ok(html(pages::estimate(calories)))
}

#[post("/recommendation")]
pub async fn recommendation(form: Option<web::Form<RecommendationForm>>) -> HttpResponse {
    // A request without a urlencoded body has no `calories` field.
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let recommendation = Recommendation::for_calories(form.calories());
    info!(
        "Recommending {:?} for {} calories",
        recommendation.band, recommendation.calories
    );

    html(pages::recommendation(&recommendation))
}
