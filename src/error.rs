use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration invalide: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Fenêtre du navigateur indisponible")]
    NoWindow,

    #[error("Document indisponible")]
    NoDocument,

    #[error("Élément <head> introuvable")]
    NoHead,

    #[error("Opération DOM échouée: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(format!("{:?}", value))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Erreur de requête: {0}")]
    Request(String),

    #[error("Erreur HTTP: {0}")]
    Status(u16),
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        SubmitError::Request(e.to_string())
    }
}
