//! Command line arguments and the validated console configuration

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::credential::CredentialTypeId;
use crate::survey::{audit_questions, SurveySpec};

pub const DEFAULT_URL: &str = "http://localhost:8013";
pub const DEFAULT_LABEL: &str = "Credential";

/// Credential lookup and survey preview for an automation console
#[derive(Parser, Debug, Clone)]
#[command(name = "opsdeck")]
#[command(about = "Pick a credential and preview a job template survey")]
pub struct Args {
    /// Console base URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// API token sent as a bearer token
    #[arg(long)]
    pub token: Option<String>,

    /// Credential type id to filter by; repeat to cycle with `t`
    #[arg(long = "credential-type", default_value = "1")]
    pub credential_types: Vec<String>,

    /// Label shown above the lookup
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Select the credential automatically when only one matches
    #[arg(long)]
    pub auto_populate: bool,

    /// Mark the lookup as required
    #[arg(long)]
    pub required: bool,

    /// Survey definition (JSON) to preview with `p`
    #[arg(long)]
    pub survey: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one --credential-type is required")]
    NoCredentialTypes,

    #[error("empty --credential-type value")]
    EmptyCredentialType,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid survey in {path}: {source}")]
    Survey {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Validated settings for one console session
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// First entry is used on start
    pub credential_types: Vec<CredentialTypeId>,
    pub label: String,
    pub auto_populate: bool,
    pub required: bool,
    pub survey: SurveySpec,
}

impl ConsoleConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.credential_types.is_empty() {
            return Err(ConfigError::NoCredentialTypes);
        }
        let credential_types = args
            .credential_types
            .iter()
            .map(|id| {
                let id = id.trim();
                if id.is_empty() {
                    Err(ConfigError::EmptyCredentialType)
                } else {
                    Ok(CredentialTypeId::from(id))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let survey = match &args.survey {
            Some(path) => load_survey(path)?,
            None => SurveySpec::default(),
        };

        Ok(Self {
            base_url: args.url.clone(),
            token: args.token.clone(),
            credential_types,
            label: args.label.clone(),
            auto_populate: args.auto_populate,
            required: args.required,
            survey,
        })
    }
}

/// Read a survey definition and log any issues in it.
pub fn load_survey(path: &Path) -> Result<SurveySpec, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let survey: SurveySpec = serde_json::from_str(&text).map_err(|source| ConfigError::Survey {
        path: path.to_path_buf(),
        source,
    })?;

    let issues = audit_questions(&survey.spec);
    tracing::info!(
        path = %path.display(),
        questions = survey.spec.len(),
        issues = issues.len(),
        "loaded survey"
    );
    Ok(survey)
}
