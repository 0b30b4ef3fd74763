#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MailplateError {
    #[error("Subject template is required")]
    #[diagnostic(help("Set subjectTemplate on the notification"))]
    MissingSubjectTemplate,

    #[error("Body template is required")]
    #[diagnostic(help("Set bodyTemplate on the notification"))]
    MissingBodyTemplate,

    #[error("Body template \"{key}\" not found in templates")]
    #[diagnostic(help("Check that the key matches a path in the bundled template map"))]
    BodyTemplateNotFound { key: String },

    #[error("Subject template \"{key}\" not found in templates")]
    #[diagnostic(help("Check that the key matches a path in the bundled template map"))]
    SubjectTemplateNotFound { key: String },

    /// Engine failures pass through with the engine's own message and source chain.
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    #[error("Directory \"{}\" does not exist", path.display())]
    InputDirectoryMissing { path: PathBuf },

    #[error("\"{}\" is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template bundle")]
    #[diagnostic(help("A bundle must be a flat JSON object of string values"))]
    BundleParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize template bundle")]
    BundleSerialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse renderer options")]
    #[diagnostic(help("Check the TOML syntax in your options file"))]
    OptionsParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("{count} template(s) failed to compile")]
    #[diagnostic(help("Fix the listed templates or run without --check"))]
    InvalidTemplates { count: usize },
}

pub type Result<T> = std::result::Result<T, MailplateError>;
