use std::env;

use url::Url;

pub const DEFAULT_HF_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Which summarization backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    HuggingFace,
    OpenAI,
}

impl Backend {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "huggingface" | "hf" => Ok(Backend::HuggingFace),
            "openai" => Ok(Backend::OpenAI),
            other => Err(format!(
                "SUMMARIZER_BACKEND: unknown backend '{other}' (expected 'huggingface' or 'openai')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    pub hf_api_token: Option<String>,
    pub hf_model: String,
    pub hf_api_url: String,
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("SUMMARIZER_BACKEND") {
            Some(raw) => Backend::parse(&raw)?,
            None => Backend::default(),
        };

        let hf_api_url = validate_url(
            "HF_API_URL",
            get("HF_API_URL").unwrap_or_else(|| DEFAULT_HF_API_URL.to_string()),
        )?;
        let openai_api_url = validate_url(
            "OPENAI_API_URL",
            get("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
        )?;

        let openai_api_key = get("OPENAI_API_KEY");
        if backend == Backend::OpenAI && openai_api_key.is_none() {
            return Err("OPENAI_API_KEY: required when SUMMARIZER_BACKEND=openai".to_string());
        }

        Ok(Self {
            backend,
            hf_api_token: get("HF_API_TOKEN"),
            hf_model: get("HF_MODEL").unwrap_or_else(|| DEFAULT_HF_MODEL.to_string()),
            hf_api_url,
            openai_api_key,
            openai_org_id: get("OPENAI_ORG_ID"),
            openai_model: get("OPENAI_MODEL"),
            openai_api_url,
        })
    }
}

fn validate_url(name: &str, raw: String) -> Result<String, String> {
    let parsed = Url::parse(&raw).map_err(|e| format!("{name}: {e}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(format!("{name}: unsupported scheme '{}'", parsed.scheme()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
