use clap::Parser;

use mailplate_core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_SUFFIX};

#[derive(Parser)]
#[command(
    name = "mailplate-bundle",
    about = "Bundle a directory of email templates into a single JSON file",
    after_help = "Examples:\n  mailplate-bundle\n  mailplate-bundle ./templates\n  mailplate-bundle ./templates ./compiled-templates.json",
    version
)]
pub struct Cli {
    /// Directory containing templates
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    /// Output JSON file path
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Only files ending in this suffix are bundled
    #[arg(long, default_value = DEFAULT_TEMPLATE_SUFFIX)]
    pub suffix: String,

    /// Refuse to write the bundle if any template fails to compile
    #[arg(long)]
    pub check: bool,
}
