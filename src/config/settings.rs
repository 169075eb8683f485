// Configuration structs

pub const DEFAULT_API_VERSION: &str = "2024-06-01";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct Config {
    /// Azure OpenAI resource endpoint, e.g. https://myresource.openai.azure.com
    pub endpoint: String,

    /// Azure OpenAI API key
    pub api_key: String,

    /// API version query parameter
    pub api_version: String,

    /// Deployment used by the gatekeeper classifier
    pub classifier_deployment: String,

    /// Deployment used by the specialist responder
    pub specialist_deployment: String,
}

impl Config {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            api_version: DEFAULT_API_VERSION.to_string(),
            classifier_deployment: DEFAULT_DEPLOYMENT.to_string(),
            specialist_deployment: DEFAULT_DEPLOYMENT.to_string(),
        }
    }
}
