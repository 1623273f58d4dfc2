use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default Gemini API base URL used when `GEMINI_BASE_URL` is not set.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model used for summary generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Environment variables that should be present for every feature to work. Their absence
/// is reported at startup but never prevents the server from starting.
pub const REQUIRED_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "MAIL_USERNAME", "MAIL_PASSWORD"];

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that are allowed to receive server responses.
    /// Use `*` to allow any origin.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// The API key to use when calling the Gemini API.
    #[arg(long, env)]
    gemini_api_key: Option<String>,

    /// The Gemini model identifier used to generate summaries.
    #[arg(long, env, default_value = DEFAULT_GEMINI_MODEL)]
    gemini_model: String,

    /// The base URL of the Gemini API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_GEMINI_BASE_URL)]
    gemini_base_url: String,

    /// Timeout in seconds for a single Gemini request
    #[arg(long, env, default_value_t = 60)]
    pub gemini_timeout_secs: u64,

    /// The SMTP relay host used to send summary emails.
    #[arg(long, env, default_value = "smtp.gmail.com")]
    mail_server: String,

    /// The SMTP relay port.
    #[arg(long, env, default_value_t = 587)]
    pub mail_port: u16,

    /// Require STARTTLS when talking to the SMTP relay.
    /// Accepts the usual spellings (`true`, `True`, `1`, `yes`, `off`, ...).
    #[arg(
        long,
        env,
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub mail_use_tls: bool,

    /// The SMTP username (usually the sending mailbox).
    #[arg(long, env)]
    mail_username: Option<String>,

    /// The SMTP password or app password.
    #[arg(long, env)]
    mail_password: Option<String>,

    /// The From address for outgoing mail. Falls back to the SMTP username.
    #[arg(long, env)]
    mail_default_sender: Option<String>,

    /// Timeout in seconds for a single SMTP exchange
    #[arg(long, env, default_value_t = 60)]
    pub mail_timeout_secs: u64,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 5000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("0.0.0.0")
    }

    /// Returns true when CORS should accept requests from any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o.trim() == "*")
    }

    /// Returns the Gemini API key, if configured.
    pub fn gemini_api_key(&self) -> Option<String> {
        non_empty(&self.gemini_api_key)
    }

    pub fn set_gemini_api_key(mut self, api_key: String) -> Self {
        self.gemini_api_key = Some(api_key);
        self
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    /// Returns the Gemini API base URL without a trailing slash.
    pub fn gemini_base_url(&self) -> &str {
        self.gemini_base_url.trim_end_matches('/')
    }

    pub fn set_gemini_base_url(mut self, base_url: String) -> Self {
        self.gemini_base_url = base_url;
        self
    }

    pub fn mail_server(&self) -> &str {
        &self.mail_server
    }

    pub fn mail_username(&self) -> Option<String> {
        non_empty(&self.mail_username)
    }

    pub fn mail_password(&self) -> Option<String> {
        non_empty(&self.mail_password)
    }

    /// Returns the From address for outgoing mail, falling back to the SMTP username.
    pub fn mail_default_sender(&self) -> Option<String> {
        non_empty(&self.mail_default_sender).or_else(|| self.mail_username())
    }

    pub fn set_mail_credentials(mut self, username: String, password: String) -> Self {
        self.mail_username = Some(username);
        self.mail_password = Some(password);
        self
    }

    /// Names of the required environment variables that are missing or empty.
    pub fn missing_env_vars(&self) -> Vec<&'static str> {
        let present = [
            self.gemini_api_key().is_some(),
            self.mail_username().is_some(),
            self.mail_password().is_some(),
        ];

        REQUIRED_ENV_VARS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
