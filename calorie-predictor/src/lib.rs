pub mod linear;
pub mod onnx;

use std::{path::Path, sync::Arc};

use calorie_model::measurement::FeatureVector;
use log::info;

pub use linear::LinearPredictor;
pub use onnx::OnnxPredictor;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid linear model: {0}")]
    Format(#[from] ron::error::SpannedError),
    #[error("model error: {0}")]
    Model(String),
    #[error("model produced no output")]
    EmptyOutput,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Pre-trained regression model estimating burned calories.
///
/// Implementations are loaded once and never mutated, so a single
/// instance is shared by every request handler.
#[mockall::automock]
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;
}

/// Load a predictor artifact. `.ron` files hold linear coefficients,
/// everything else is read as an ONNX graph.
pub fn load(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>> {
    let path = path.as_ref();
    let predictor: Arc<dyn Predictor> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => Arc::new(LinearPredictor::from_file(path)?),
        _ => Arc::new(OnnxPredictor::load(path)?),
    };
    info!("Loaded predictor from {}", path.display());
    Ok(predictor)
}

fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.display().to_string(),
        source,
    }
}
