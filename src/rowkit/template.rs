//! Named row templates and the inflater that turns them into row views.

use crate::color::Color;
use crate::error::{Result, RowError};
use crate::theme::Theme;
use crate::view::{Label, RowView};
use console::Term;
use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Prefix shown when a template asks for a color the theme does not define.
pub const MISSING_COLOR_INDICATOR: &str = "(!?)";

/// The blueprint for one kind of row: a minijinja template plus the slots
/// (template variables) a row built from it exposes as labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    pub name: String,
    pub source: String,
    pub slots: Vec<String>,
}

impl RowTemplate {
    pub fn new(name: &str, source: &str, slots: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Registry of row templates bound to a theme.
///
/// Plays the part of the host's layout inflater and resource lookup: rows
/// are built from it and render through it, and colors are requested from it
/// by name.
pub struct Inflater {
    env: Environment<'static>,
    templates: HashMap<String, RowTemplate>,
    theme: Theme,
    use_color: bool,
    inflated: AtomicUsize,
}

impl Inflater {
    /// Creates an inflater with automatic color detection.
    pub fn new(theme: Theme) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(theme, use_color)
    }

    /// Creates an inflater with explicit color control.
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        // Rows are terminal text; template names never imply markup.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_style_filter(&mut env, theme.clone(), use_color);
        Self {
            env,
            templates: HashMap::new(),
            theme,
            use_color,
            inflated: AtomicUsize::new(0),
        }
    }

    /// Compiles and registers a template. Re-registering a name replaces it.
    pub fn register(&mut self, template: RowTemplate) -> Result<()> {
        let mut seen = HashSet::new();
        for slot in &template.slots {
            if !seen.insert(slot.as_str()) {
                return Err(RowError::DuplicateSlot {
                    template: template.name.clone(),
                    slot: slot.clone(),
                });
            }
        }
        self.env
            .add_template_owned(template.name.clone(), template.source.clone())?;
        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Builds a fresh row from the named template, one empty label per slot.
    pub fn inflate<T>(&self, name: &str) -> Result<RowView<T>> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RowError::TemplateNotFound(name.to_string()))?;
        let labels = template.slots.iter().map(|s| Label::new(s)).collect();
        self.inflated.fetch_add(1, Ordering::Relaxed);
        Ok(RowView::new(&template.name, labels))
    }

    /// Number of rows built so far.
    pub fn inflated_count(&self) -> usize {
        self.inflated.load(Ordering::Relaxed)
    }

    /// Resolves a color resource by name.
    pub fn color(&self, name: &str) -> Result<Color> {
        Ok(self.theme.color(name)?)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Renders a registered template with the given data.
    pub fn render<S: Serialize>(&self, name: &str, data: &S) -> Result<String> {
        if !self.templates.contains_key(name) {
            return Err(RowError::TemplateNotFound(name.to_string()));
        }
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

/// Registers the `style` filter, which paints a value with a named theme color.
fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match theme.color(&name) {
            Ok(color) if use_color => color
                .paint_fg(console::Style::new().force_styling(true))
                .apply_to(&text)
                .to_string(),
            Ok(_) => text,
            Err(_) => format!("{} {}", MISSING_COLOR_INDICATOR, text),
        }
    });
}
