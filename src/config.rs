//! Configuration and CLI argument handling

use clap::Parser;

use crate::channel::DEFAULT_CHANNEL;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stopwatch-channel")]
#[command(about = "Serve a stopwatch to an application shell over a method channel")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Name of the method channel the shell calls
    #[arg(short, long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
