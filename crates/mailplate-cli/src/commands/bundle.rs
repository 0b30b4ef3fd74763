use std::path::Path;

use console::style;
use miette::Result;

use mailplate_core::bundle::{check_templates, collect_templates, write_bundle};
use mailplate_core::MailplateError;

pub fn run(input_dir: String, output_file: String, suffix: String, check: bool) -> Result<()> {
    let input_dir = Path::new(&input_dir);
    let output_file = Path::new(&output_file);

    println!(
        "{} {}",
        style(format!("Searching for {suffix} files in:")).bold(),
        style(input_dir.display()).cyan()
    );

    let templates = collect_templates(input_dir, &suffix)?;

    println!("Found {} {suffix} file(s)", templates.len());
    for key in templates.keys() {
        println!("  - {key}");
    }

    if check {
        let issues = check_templates(&templates);
        if !issues.is_empty() {
            eprintln!("\n{}", style("Errors:").red().bold());
            for issue in &issues {
                eprintln!("  {} {}: {}", style("✗").red(), issue.key, issue.message);
            }
            return Err(MailplateError::InvalidTemplates {
                count: issues.len(),
            }
            .into());
        }
    }

    write_bundle(&templates, output_file)?;

    println!(
        "\n{} Successfully compiled templates to: {}",
        style("✓").green().bold(),
        style(output_file.display()).cyan()
    );

    Ok(())
}
