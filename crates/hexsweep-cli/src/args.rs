use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "project-hex")]
#[command(
    about = "Dump a project's source files as hexadecimal text and a combined archive",
    long_about = None
)]
#[command(version)]
pub struct DumpCli {
    /// Project root to scan
    pub root: PathBuf,

    #[arg(long, help = "Directory for the generated files [default: ROOT]")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "TOML file overriding the walk filters")]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Parser, Debug)]
#[command(name = "extract-hex")]
#[command(
    about = "Extract hex color codes from a directory tree into JSON and CSV reports",
    long_about = None
)]
#[command(version)]
pub struct ColorsCli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    #[arg(
        long,
        help = "Directory that receives the hex-output folder [default: current directory]"
    )]
    pub output_base: Option<PathBuf>,

    #[arg(long, help = "TOML file overriding the walk filters")]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
