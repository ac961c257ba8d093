use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

use crate::domain::entities::PostId;

/// Command-line arguments for the postboard binary.
#[derive(Debug, Parser)]
#[command(
    name = "postboard",
    version,
    about = "Read, search, write, and delete posts on a hosted JSON API"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTBOARD_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List posts newest first, optionally filtered by a search term.
    List(ListArgs),
    /// Show a single post.
    Show(PostArgs),
    /// Create a post.
    New(NewPostArgs),
    /// Delete a post.
    Delete(PostArgs),
    /// About this client.
    About,
    /// Render the view for an arbitrary route path, e.g. `/post/3`.
    Open(OpenArgs),
    /// Interactive session reading commands from stdin.
    Shell,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the posts API base URL.
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive text to look for in titles and bodies.
    #[arg(long, short = 's', value_name = "TERM", default_value = "")]
    pub search: String,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    /// Post identifier.
    #[arg(value_name = "ID")]
    pub id: PostId,
}

#[derive(Debug, Args, Clone)]
pub struct NewPostArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body from a file instead.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub body_file: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct OpenArgs {
    #[arg(value_name = "PATH")]
    pub path: String,
}
