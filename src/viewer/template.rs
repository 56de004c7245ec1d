//! Minimal string template with typed variable injection.

/// Trait for template variable sets.
///
/// `apply` replaces this set's placeholders in `content`; implementations
/// are responsible for escaping each value for the context it lands in.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// A compile-time-embedded template.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    content: &'static str,
}

impl Template {
    pub const fn new(content: &'static str) -> Self {
        Self { content }
    }

    pub fn render<V: TemplateVars>(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}
