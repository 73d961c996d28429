use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content_assembly_lib::config::{
    self, ConfigLoader, DiscoveryConfig, PartialConfig, PartialPromptConfig, PartialStorageConfig,
};
use content_assembly_lib::file_storage::discovery as session_store;
use content_assembly_lib::templates::{self, builtin, TemplateResolver, TemplateSource};
use content_assembly_lib::{
    calculate_progress, diagnose, extract_signals, generate_questions, should_show_gate,
    DiscoverySession, KnownInputs, PromptBuilder,
};
use std::path::{Path, PathBuf};

/// Content Assembly - guided discovery from video idea to script prompt
#[derive(Parser, Debug)]
#[command(name = "content-assembly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding .content-assembly/ (defaults to config, then the working directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of the global one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the enhanced script-generation prompt
    #[arg(long, global = true, env = "CONTENT_ASSEMBLY_ENHANCED_PROMPT")]
    enhanced_prompt: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a free-text idea into an entropy level
    Diagnose {
        text: String,
        /// JSON file with already-known fields
        #[arg(long)]
        inputs: Option<PathBuf>,
        /// Also print the raw detection signals
        #[arg(long)]
        verbose: bool,
    },
    /// List the follow-up questions for a free-text idea
    Questions {
        text: String,
        /// JSON file with already-known fields
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
    /// Show progress and whether the "generate now" gate applies
    Progress { answered: u32, total: u32 },
    /// Manage discovery sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Render the script-generation prompt for a session
    Prompt { id: String },
    /// List prompt templates and where each one resolves from
    Templates,
    /// Inspect or create config files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print config file locations and the merged settings
    Show,
    /// Write the current settings to the project (or global) config file
    Init {
        /// Write the global config instead of the project one
        #[arg(long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    /// Start a new session, optionally with the first message
    New {
        text: Option<String>,
        /// JSON file with already-known fields
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
    /// Add a free-text message and re-diagnose
    Say { id: String, text: String },
    /// Answer the next pending question
    Answer { id: String, text: String },
    /// Skip the next pending question
    Skip { id: String },
    /// Show a session's state
    Show { id: String },
    /// List sessions, newest first
    List,
    /// Delete a session
    Delete { id: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let project_dir = project_dir(&cli)?;
    let config = load_config(&cli, &project_dir)?;
    let data_dir = resolve_data_dir(&config);

    match cli.command {
        Command::Diagnose {
            text,
            inputs,
            verbose,
        } => {
            let known = read_inputs(inputs.as_deref())?;
            let diagnosis = diagnose(&text, &known);
            let output = if verbose {
                serde_json::json!({
                    "diagnosis": diagnosis,
                    "signals": extract_signals(&text, &known),
                })
            } else {
                serde_json::to_value(&diagnosis)?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Questions { text, inputs } => {
            let known = read_inputs(inputs.as_deref())?;
            let diagnosis = diagnose(&text, &known);
            println!(
                "{} ({} questions)",
                diagnosis.level, diagnosis.recommended_questions
            );
            for (i, question) in generate_questions(&diagnosis, &known).iter().enumerate() {
                println!("{}. {}", i + 1, question);
            }
        }
        Command::Progress { answered, total } => {
            println!("{}%", calculate_progress(answered, total));
            if should_show_gate(answered, total) {
                println!("Enough to generate now, or keep answering for a sharper script.");
            }
        }
        Command::Session { action } => run_session(action, &data_dir)?,
        Command::Prompt { id } => {
            let session = session_store::read_session(&data_dir, &id)?;
            let prompt = PromptBuilder::new(&config.prompts)?.build(&session)?;
            println!("{}", prompt);
        }
        Command::Templates => {
            let active = templates::template_name(&config.prompts);
            let resolver = TemplateResolver::new()
                .with_templates_dir(config.prompts.templates_dir.as_deref().map(Path::new));
            for name in builtin::list_builtin_templates() {
                let template = resolver.resolve(name)?;
                let source = match (&template.source, &template.path) {
                    (TemplateSource::Custom, Some(path)) => path.display().to_string(),
                    _ => "builtin".to_string(),
                };
                let marker = if name == active { "*" } else { " " };
                println!("{} {:<28} {}", marker, name, source);
            }
        }
        Command::Config { action } => {
            let loader = config_loader(cli.config.clone(), &project_dir);
            run_config(action, &loader, &config)?;
        }
    }

    Ok(())
}

fn run_session(action: SessionAction, data_dir: &Path) -> Result<()> {
    match action {
        SessionAction::New { text, inputs } => {
            let mut session = DiscoverySession::with_inputs(read_inputs(inputs.as_deref())?);
            if let Some(text) = text {
                session.submit_message(&text);
            }
            session_store::save_session(data_dir, &session)?;
            print_session(&session);
        }
        SessionAction::Say { id, text } => {
            let mut session = session_store::read_session(data_dir, &id)?;
            session.submit_message(&text);
            session_store::save_session(data_dir, &session)?;
            print_session(&session);
        }
        SessionAction::Answer { id, text } => {
            let mut session = session_store::read_session(data_dir, &id)?;
            session.answer(&text)?;
            session_store::save_session(data_dir, &session)?;
            print_session(&session);
        }
        SessionAction::Skip { id } => {
            let mut session = session_store::read_session(data_dir, &id)?;
            session.skip()?;
            session_store::save_session(data_dir, &session)?;
            print_session(&session);
        }
        SessionAction::Show { id } => {
            let session = session_store::read_session(data_dir, &id)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        SessionAction::List => {
            for session in session_store::list_sessions(data_dir)? {
                let level = session
                    .diagnosis
                    .as_ref()
                    .map(|d| d.level.as_str())
                    .unwrap_or("-");
                println!(
                    "{}  {:<12}  {:>3}%  {}",
                    session.id,
                    level,
                    session.progress(),
                    session.updated_at.to_rfc3339()
                );
            }
        }
        SessionAction::Delete { id } => {
            session_store::delete_session(data_dir, &id)?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

fn run_config(action: ConfigAction, loader: &ConfigLoader, config: &DiscoveryConfig) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let describe = |path: Option<&Path>| match path {
                Some(path) if path.exists() => path.display().to_string(),
                Some(path) => format!("{} (not found)", path.display()),
                None => "(none)".to_string(),
            };
            println!("# global:  {}", describe(loader.global_config_path()));
            println!("# project: {}", describe(loader.project_config_path()));
            println!();
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Init { global, force } => {
            let target = if global {
                loader.global_config_path()
            } else {
                loader.project_config_path()
            }
            .context("No config location available")?;

            if target.exists() && !force {
                anyhow::bail!(
                    "Config file '{}' already exists (use --force to overwrite)",
                    target.display()
                );
            }
            loader.save_to_path(target, config)?;
            println!("Wrote {}", target.display());
        }
    }

    Ok(())
}

fn print_session(session: &DiscoverySession) {
    println!("Session {}", session.id);
    if let Some(diagnosis) = &session.diagnosis {
        println!("Level: {} - {}", diagnosis.level, diagnosis.reasoning);
    }
    println!(
        "Progress: {}% ({}/{})",
        session.progress(),
        session.answered_count(),
        session.total_questions()
    );

    match session.next_question() {
        Some(question) => {
            println!("Next: {}", question.question);
            if let Some(hint) = &question.hint {
                println!("      ({})", hint);
            }
        }
        None if session.is_complete() => println!("Discovery complete. Run `prompt {}`.", session.id),
        None => println!("Send a message to start discovery."),
    }

    if session.should_show_gate() {
        println!("You can generate now, or keep answering for a sharper script.");
    }
}

fn read_inputs(path: Option<&Path>) -> Result<KnownInputs> {
    let Some(path) = path else {
        return Ok(KnownInputs::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inputs file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse inputs file '{}'", path.display()))
}

fn project_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("Failed to resolve working directory"),
    }
}

fn config_loader(global_override: Option<PathBuf>, project_dir: &Path) -> ConfigLoader {
    let loader = ConfigLoader::new().with_project_path(project_dir);
    match global_override {
        Some(path) => loader.with_global_path(Some(path)),
        None => loader,
    }
}

fn load_config(cli: &Cli, project_dir: &Path) -> Result<DiscoveryConfig> {
    let overrides = PartialConfig {
        prompts: cli.enhanced_prompt.then(|| PartialPromptConfig {
            use_enhanced_prompt: Some(true),
            ..Default::default()
        }),
        storage: cli.data_dir.as_ref().map(|dir| PartialStorageConfig {
            data_dir: Some(dir.to_string_lossy().to_string()),
        }),
    };

    config::load_merged_config(Some(project_dir), cli.config.clone(), Some(overrides))
}

fn resolve_data_dir(config: &DiscoveryConfig) -> PathBuf {
    config
        .storage
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
