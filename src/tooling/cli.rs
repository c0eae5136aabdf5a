//! CLI Tooling
//!
//! Command-line interface over the repository browser. Each command opens a
//! repository through the content service, then renders the resulting view.

use crate::browser::{RepositoryBrowser, ViewState};
use crate::config::{CommitlyConfig, ConfigLoader};
use crate::error::ApiError;
use crate::selection::{EditorCollaborator, SelectOutcome};
use crate::service::{HttpContentService, SaveFileRequest};
use crate::session::Session;
use crate::tooling::render::{format_file_text, format_tree_json, format_view_text};
use crate::tree::path::split_segments;
use crate::types::FileRecord;
use crate::views::TreeView;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Commitly CLI - browse and edit repository files
#[derive(Parser)]
#[command(name = "commitly")]
#[command(about = "Browse the files of a Commitly repository")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bearer token for the content service
    #[arg(long, env = "COMMITLY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Content service base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the file tree of a repository
    Files {
        repository: String,
        /// Directory to show expanded (repeatable)
        #[arg(long = "expand")]
        expand: Vec<String>,
        /// Expand every directory
        #[arg(long, conflicts_with = "expand")]
        expand_all: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Select a file and print its details and content
    Show { repository: String, path: String },
    /// Write a local file into the repository, then list the refreshed tree
    Save {
        repository: String,
        path: String,
        /// Local file whose content is saved
        #[arg(long)]
        from: PathBuf,
    },
}

impl Cli {
    /// Load layered configuration and apply command-line overrides.
    pub fn load_config(&self) -> Result<CommitlyConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if let Some(token) = &self.token {
            config.service.token = Some(token.clone());
        }
        if let Some(api_url) = &self.api_url {
            config.service.api_url = api_url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

/// Editor stand-in that renders the selected file for the terminal.
#[derive(Debug, Default)]
pub struct TerminalEditor {
    rendered: Option<String>,
}

impl TerminalEditor {
    pub fn take_rendered(&mut self) -> Option<String> {
        self.rendered.take()
    }
}

impl EditorCollaborator for TerminalEditor {
    fn on_file_select(&mut self, record: &FileRecord) {
        self.rendered = Some(format_file_text(record));
    }
}

type Browser = RepositoryBrowser<HttpContentService, TerminalEditor>;

/// CLI context for executing commands
pub struct CliContext {
    config: CommitlyConfig,
    session: Session,
    service: HttpContentService,
}

impl CliContext {
    pub fn new(config: CommitlyConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let token = config
            .service
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ApiError::ConfigError(
                    "No token configured: pass --token or set COMMITLY_TOKEN".to_string(),
                )
            })?;
        let session = Session::new(config.service.api_url.clone(), token);
        let service = HttpContentService::new(config.timeout())?;
        Ok(Self {
            config,
            session,
            service,
        })
    }

    pub fn config(&self) -> &CommitlyConfig {
        &self.config
    }

    fn browser(&self) -> Browser {
        RepositoryBrowser::with_options(
            self.service.clone(),
            self.session.clone(),
            TerminalEditor::default(),
            self.config.tree_builder(),
            self.config.selection.unsaved_policy,
        )
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        let mut browser = self.browser();

        match command {
            Commands::Files {
                repository,
                expand,
                expand_all,
                format,
            } => {
                if format != "text" && format != "json" {
                    return Err(ApiError::InvalidInput(format!(
                        "Invalid format: {} (must be 'text' or 'json')",
                        format
                    )));
                }
                rt.block_on(browser.open(repository));
                for dir in expand {
                    expand_with_ancestors(&mut browser, dir)?;
                }
                render_tree(&browser, *expand_all, format == "json")
            }
            Commands::Show { repository, path } => {
                rt.block_on(browser.open(repository));
                ensure_loaded(&browser)?;
                match browser.select_file(path) {
                    None => Err(ApiError::InvalidInput(format!("No such file: {}", path))),
                    Some(SelectOutcome::Held) => Err(ApiError::InvalidInput(
                        "Selection held behind unsaved edits".to_string(),
                    )),
                    Some(SelectOutcome::Forwarded) => browser
                        .selection_mut()
                        .editor_mut()
                        .take_rendered()
                        .ok_or_else(|| ApiError::InvalidInput(format!("No such file: {}", path))),
                }
            }
            Commands::Save {
                repository,
                path,
                from,
            } => {
                let content = std::fs::read_to_string(from)?;
                let request = SaveFileRequest::for_path(path, content)?;
                rt.block_on(browser.open(repository));
                ensure_writable(&browser)?;
                rt.block_on(browser.save_file(&request))?;
                info!(repository = %repository, path = %request.path, "Saved file from CLI");
                if let Some((parent, _)) = request.path.trim_matches('/').rsplit_once('/') {
                    expand_with_ancestors(&mut browser, parent)?;
                }
                render_tree(&browser, false, false)
            }
        }
    }
}

/// Expand `dir` and every directory above it so it is visible.
fn expand_with_ancestors(browser: &mut Browser, dir: &str) -> Result<(), ApiError> {
    let segments = split_segments(dir)?;
    let expansion = browser.expansion_mut();
    for end in 1..=segments.len() {
        expansion.expand(&segments[..end].join("/"));
    }
    Ok(())
}

fn ensure_loaded(browser: &Browser) -> Result<(), ApiError> {
    match browser.view().state() {
        ViewState::Ready { .. } => Ok(()),
        ViewState::Error { message } => Err(ApiError::Fetch(message.clone())),
        ViewState::Empty => Err(ApiError::InvalidInput(
            "Repository has no files".to_string(),
        )),
        ViewState::Idle | ViewState::Loading => Err(ApiError::Fetch(
            "Repository files not loaded".to_string(),
        )),
    }
}

/// Saving is allowed into an empty repository but not after a failed load.
fn ensure_writable(browser: &Browser) -> Result<(), ApiError> {
    match browser.view().state() {
        ViewState::Empty => Ok(()),
        _ => ensure_loaded(browser),
    }
}

fn render_tree(browser: &Browser, expand_all: bool, json: bool) -> Result<String, ApiError> {
    let view = browser.view();
    let tree = view.tree().map(|root| {
        if expand_all {
            TreeView::project_all(root)
        } else {
            TreeView::project(root, view.expansion())
        }
    });

    if json {
        return format_tree_json(view, tree.as_ref());
    }
    if let ViewState::Error { message } = view.state() {
        return Err(ApiError::Fetch(message.clone()));
    }
    Ok(format_view_text(view, tree.as_ref()))
}
