//! Subject/body rendering for email notifications on top of minijinja.
//!
//! Two renderers implement [`EmailTemplateRenderer`]:
//!
//! - [`FileTemplateRenderer`] compiles template files from disk.
//! - [`InlineTemplateRenderer`] looks template sources up in a [`TemplateMap`],
//!   usually one produced by [`bundle::bundle`] at build time.

pub mod bundle;
pub mod config;
pub mod error;
pub mod logger;
pub mod notification;
pub mod renderer;
pub mod template_map;

pub use bundle::{bundle, collect_templates, BundleOptions, BundleReport};
pub use config::{load_options, RendererOptions};
pub use error::{MailplateError, Result};
pub use logger::{Logger, TracingLogger};
pub use notification::{Notification, RenderContext, RenderedEmail, TemplateContent};
pub use renderer::{EmailTemplateRenderer, FileTemplateRenderer, InlineTemplateRenderer};
pub use template_map::TemplateMap;
