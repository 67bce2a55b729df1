use std::error::Error;

use actix_web::{middleware::Logger, web, App, HttpServer};
use calorie_api::settings::Settings;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let settings = Settings::from_env()?;

    info!("Loading predictor");
    let predictor = web::Data::from(calorie_predictor::load(&settings.model_path)?);

    info!("Listening on {}:{}", settings.host, settings.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(predictor.clone())
            .configure(calorie_api::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
