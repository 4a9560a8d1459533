//! Primary configuration text.

pub mod directives;
pub mod template;

pub use directives::{render_directives, server_line};
pub use template::TemplateEvaluator;

use crate::domain::AppError;
use crate::domain::parameters::ResolvedConfig;

/// Render the primary configuration file.
///
/// A template override hands the whole job to `evaluator`; otherwise the
/// built-in layout is used and the evaluator is never consulted.
pub fn render<E>(config: &ResolvedConfig, evaluator: &E) -> Result<String, AppError>
where
    E: TemplateEvaluator + ?Sized,
{
    match &config.template {
        Some(template) => evaluator.evaluate(template, config),
        None => Ok(render_directives(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::TemplateOverride;
    use crate::testing::{RecordingEvaluator, resolved_config};

    #[test]
    fn builtin_layout_without_override() {
        let config = resolved_config(false);
        let evaluator = RecordingEvaluator::new("unused");

        let text = render(&config, &evaluator).unwrap();

        assert_eq!(text, render_directives(&config));
        assert!(evaluator.calls().is_empty());
    }

    #[test]
    fn override_delegates_with_full_context() {
        let mut config = resolved_config(false);
        config.template = Some(TemplateOverride::Text("site/ntp.conf.j2".to_string()));
        let evaluator = RecordingEvaluator::new("server erbserver1\n");

        let text = render(&config, &evaluator).unwrap();

        assert_eq!(text, "server erbserver1\n");
        assert_eq!(evaluator.calls(), vec!["site/ntp.conf.j2".to_string()]);
    }
}
