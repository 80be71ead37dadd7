use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "rockin-forms",
    version,
    about = "Form plumbing for core-sample data-entry pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Trace log path (JSONL); overrides the config file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: rockin-forms.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join name components into a composite record name
    Name {
        /// Comma-separated components, in order
        #[arg(long, value_delimiter = ',')]
        components: Vec<String>,
    },

    /// Resolve a form's fields against a page snapshot
    Resolve {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Form spec name (core, core_chip, ...)
        #[arg(long)]
        form: String,

        /// Form spec YAML file or directory (default: from config)
        #[arg(long)]
        specs: Option<String>,
    },

    /// Populate a page snapshot's form fields from a record
    Populate {
        /// Path to the page snapshot JSON
        #[arg(long)]
        snapshot: String,

        /// Path to the record JSON
        #[arg(long)]
        record: String,

        /// Form spec name (core, core_chip, ...)
        #[arg(long)]
        form: String,

        /// Form spec YAML file or directory (default: from config)
        #[arg(long)]
        specs: Option<String>,

        /// Skip fields with a missing element or value instead of failing
        #[arg(long, default_value_t = false)]
        skip_missing: bool,

        /// Output path for the populated snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `rockin-forms.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub populate: PopulateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_specs_dir")]
    pub specs: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            specs: "forms".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PopulateConfig {
    #[serde(default)]
    pub skip_missing: bool,

    pub trace: Option<String>,
}

// Serde default helpers
fn default_specs_dir() -> String { "forms".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("rockin-forms.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
