//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in map templates
//! pre-registered. HTML escaping is disabled: the output is Rust source,
//! and location names routinely contain apostrophes.
//!
//! # Examples
//!
//! ```
//! use hexmap_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let rendered = engine
//!     .render("classic/map_enum", &json!({"tiles": [{"name": "Stonecradle"}]}))
//!     .unwrap();
//! assert!(rendered.contains("Stonecradle(Stonecradle),"));
//! ```

use handlebars::Handlebars;
use hexmap_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "common/tile_enum",
        include_str!("../templates/common/tile_enum.rs.hbs"),
    ),
    (
        "classic/classification",
        include_str!("../templates/classic/classification.rs.hbs"),
    ),
    (
        "classic/coordinates",
        include_str!("../templates/classic/coordinates.rs.hbs"),
    ),
    (
        "classic/location_trait",
        include_str!("../templates/classic/location_trait.rs.hbs"),
    ),
    (
        "classic/map_enum",
        include_str!("../templates/classic/map_enum.rs.hbs"),
    ),
    (
        "rich/classification",
        include_str!("../templates/rich/classification.rs.hbs"),
    ),
    (
        "rich/coordinates",
        include_str!("../templates/rich/coordinates.rs.hbs"),
    ),
    ("rich/naming", include_str!("../templates/rich/naming.rs.hbs")),
    (
        "rich/location_trait",
        include_str!("../templates/rich/location_trait.rs.hbs"),
    ),
    (
        "rich/map_enum",
        include_str!("../templates/rich/map_enum.rs.hbs"),
    ),
    (
        "rich/map_dispatch",
        include_str!("../templates/rich/map_dispatch.rs.hbs"),
    ),
];

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    template: (*name).to_string(),
                    message: format!("failed to register template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if the template is not registered, the context cannot
    /// be serialized, or a variable used by the template is missing.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Registers a custom template, replacing any template with the same name.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmap_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "// {{name}}").unwrap();
    /// assert_eq!(engine.render("custom", &json!({"name": "x"})).unwrap(), "// x");
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("failed to register template: {e}"),
            })
    }
}
