use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_SUFFIX};
use crate::error::{MailplateError, Result};
use crate::renderer::compile_source;
use crate::template_map::TemplateMap;

/// Options for the `bundle` operation.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Directory searched recursively for templates.
    pub input_dir: PathBuf,
    /// Bundle destination. Replaced if it already exists.
    pub output_file: PathBuf,
    /// Only files whose name ends in this suffix are bundled.
    pub suffix: String,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
        }
    }
}

/// What a bundle run wrote.
#[derive(Debug)]
pub struct BundleReport {
    pub output_file: PathBuf,
    /// Bundled keys in the order they appear in the output.
    pub templates: Vec<String>,
}

/// A template that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIssue {
    pub key: String,
    pub message: String,
}

/// Collect every template under `options.input_dir` and write them to
/// `options.output_file` as a JSON object.
pub fn bundle(options: &BundleOptions) -> Result<BundleReport> {
    let templates = collect_templates(&options.input_dir, &options.suffix)?;
    write_bundle(&templates, &options.output_file)?;

    Ok(BundleReport {
        output_file: options.output_file.clone(),
        templates: templates.keys().map(str::to_string).collect(),
    })
}

/// Fail unless `input_dir` exists and is a directory.
pub fn validate_input_dir(input_dir: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(input_dir) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MailplateError::InputDirectoryMissing {
                path: input_dir.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(MailplateError::Io {
                context: format!("reading metadata for {}", input_dir.display()),
                source: e,
            })
        }
    };

    if !metadata.is_dir() {
        return Err(MailplateError::NotADirectory {
            path: input_dir.to_path_buf(),
        });
    }

    Ok(())
}

/// Walk `input_dir` and read every file whose name ends in `suffix`.
///
/// Keys are paths relative to `input_dir` joined with `/` on every platform.
/// Contents are kept byte-for-byte.
pub fn collect_templates(input_dir: &Path, suffix: &str) -> Result<TemplateMap> {
    validate_input_dir(input_dir)?;

    let mut templates = BTreeMap::new();

    for entry in WalkDir::new(input_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| MailplateError::Io {
            context: format!("walking {}", input_dir.display()),
            source: e.into(),
        })?;

        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        let path = entry.path();
        let rel_path = path.strip_prefix(input_dir).unwrap_or(path);

        let content = std::fs::read_to_string(path).map_err(|e| MailplateError::Io {
            context: format!("reading {}", path.display()),
            source: e,
        })?;

        templates.insert(template_key(rel_path), content);
    }

    Ok(TemplateMap::from(templates))
}

/// Write `templates` as pretty-printed JSON.
///
/// The content lands in a temporary file beside `output_file` first and is
/// then moved over it, so readers never see a partial bundle.
pub fn write_bundle(templates: &TemplateMap, output_file: &Path) -> Result<()> {
    let json = templates.to_json_pretty()?;

    let parent = output_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| MailplateError::Io {
        context: format!("creating temporary file in {}", parent.display()),
        source: e,
    })?;

    staged
        .write_all(json.as_bytes())
        .map_err(|e| MailplateError::Io {
            context: format!("writing {}", staged.path().display()),
            source: e,
        })?;

    staged
        .persist(output_file)
        .map_err(|e| MailplateError::Io {
            context: format!("writing {}", output_file.display()),
            source: e.error,
        })?;

    Ok(())
}

/// Compile every template in the map and report the ones that fail.
pub fn check_templates(templates: &TemplateMap) -> Vec<TemplateIssue> {
    templates
        .iter()
        .filter_map(|(key, source)| {
            compile_source(key, source).err().map(|e| TemplateIssue {
                key: key.to_string(),
                message: error_chain(&e),
            })
        })
        .collect()
}

fn template_key(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
