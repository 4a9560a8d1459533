use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use tracing::debug;

use crate::domain::parameters::{ResolvedConfig, TemplateOverride};
use crate::domain::{AppError, TemplateEvaluator, render_directives};
use crate::ports::TemplateStore;

/// Template evaluator using Minijinja.
///
/// Text templates render undefined variables as empty; structured templates
/// fail on any undefined variable.
pub struct MinijinjaTemplateEvaluator<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> MinijinjaTemplateEvaluator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Variables visible to a template: every resolved field at the top level,
/// plus `default_config`, the text the built-in layout would have produced.
#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    config: &'a ResolvedConfig,
    default_config: String,
}

impl<S: TemplateStore> TemplateEvaluator for MinijinjaTemplateEvaluator<S> {
    fn evaluate(
        &self,
        template: &TemplateOverride,
        context: &ResolvedConfig,
    ) -> Result<String, AppError> {
        let source = self.store.load(template.id())?;

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(match template {
            TemplateOverride::Text(_) => UndefinedBehavior::Lenient,
            TemplateOverride::Structured(_) => UndefinedBehavior::Strict,
        });

        debug!(template = template.id(), "evaluating template override");

        let ctx = TemplateContext { config: context, default_config: render_directives(context) };
        env.render_named_str(template.id(), &source, &ctx)
            .map_err(|err| template_render_error(template.id(), err))
    }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
