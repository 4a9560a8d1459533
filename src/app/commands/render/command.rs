use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::config::RenderRequest;
use crate::domain::artifacts::{primary_artifact, resolve_auxiliaries, system_directives};
use crate::domain::{AppError, TemplateEvaluator, normalize, platform, render};

use super::plan::RenderPlan;

/// Execute the render pipeline: facts, defaults, normalization, text, auxiliaries.
///
/// All-or-nothing: any error aborts before a plan exists, so a caller never sees
/// partial output.
pub fn execute<E>(ctx: &AppContext<E>, request: &RenderRequest) -> Result<RenderPlan, AppError>
where
    E: TemplateEvaluator,
{
    let facts = &request.facts;
    let defaults = platform::resolve(facts)?;
    debug!(
        family = %facts.family,
        name = %facts.name,
        release = %facts.release_major,
        "resolved platform defaults"
    );

    let config = normalize(&request.parameters, &defaults, facts)?;
    let text = render(&config, ctx.evaluator())?;

    let artifacts = resolve_auxiliaries(&config, &defaults);
    let directives = system_directives(&config);

    info!(
        path = %config.config_file.path,
        servers = config.servers.len(),
        artifacts = artifacts.len(),
        template = config.template.as_ref().map(|t| t.id()).unwrap_or("builtin"),
        "rendered ntp configuration"
    );

    Ok(RenderPlan {
        config: primary_artifact(&config, text),
        artifacts,
        directives,
        package: config.package.manage.then(|| config.package.clone()),
        service: config.service.manage.then(|| config.service.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifacts::content_digest;
    use crate::domain::{OsFamily, PlatformIdentity, RawParameters};
    use crate::testing::RecordingEvaluator;

    fn request(family: OsFamily, name: &str, parameters: RawParameters) -> RenderRequest {
        RenderRequest::new(PlatformIdentity::new(family, name, "12", false), parameters)
    }

    #[test]
    fn builds_complete_plan_for_redhat() {
        let ctx = AppContext::new(RecordingEvaluator::new(""));
        let plan = execute(&ctx, &request(OsFamily::RedHat, "CentOS", RawParameters::default())).unwrap();

        assert_eq!(plan.config.path, "/etc/ntp.conf");
        assert!(plan.config_text().contains("server 0.centos.pool.ntp.org\n"));
        assert!(plan.artifact("/etc/ntp/step-tickers").is_some());
        assert_eq!(plan.package.as_ref().map(|p| p.names.clone()), Some(vec!["ntp".to_string()]));
        assert_eq!(plan.service.as_ref().map(|s| s.name.as_str()), Some("ntpd"));
    }

    #[test]
    fn unmanaged_package_and_service_are_left_out() {
        let ctx = AppContext::new(RecordingEvaluator::new(""));
        let raw = RawParameters {
            package_manage: Some(false),
            service_manage: Some(false),
            ..Default::default()
        };
        let plan = execute(&ctx, &request(OsFamily::Debian, "Debian", raw)).unwrap();

        assert!(plan.package.is_none());
        assert!(plan.service.is_none());
    }

    #[test]
    fn template_override_output_becomes_config_content() {
        let ctx = AppContext::new(RecordingEvaluator::new("server eppserver1\n"));
        let raw = RawParameters { config_epp: Some("my_ntp/ntp.conf.epp".to_string()), ..Default::default() };
        let plan = execute(&ctx, &request(OsFamily::Debian, "Debian", raw)).unwrap();

        assert_eq!(plan.config_text(), "server eppserver1\n");
        assert_eq!(ctx.evaluator().calls(), vec!["my_ntp/ntp.conf.epp".to_string()]);
    }

    #[test]
    fn unsupported_platform_produces_no_plan() {
        let ctx = AppContext::new(RecordingEvaluator::new(""));
        let err = execute(&ctx, &request(OsFamily::from_fact("AIX"), "AIX", RawParameters::default()))
            .unwrap_err();
        assert!(matches!(err, AppError::PlatformUnsupported { .. }));
    }

    #[test]
    fn validation_failure_skips_template_evaluation() {
        let ctx = AppContext::new(RecordingEvaluator::new("never"));
        let raw = RawParameters {
            config_template: Some("a".to_string()),
            config_epp: Some("b".to_string()),
            ..Default::default()
        };
        let err = execute(&ctx, &request(OsFamily::Debian, "Debian", raw)).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(ctx.evaluator().calls().is_empty());
    }

    #[test]
    fn config_artifact_carries_content_digest() {
        let ctx = AppContext::new(RecordingEvaluator::new(""));
        let plan = execute(&ctx, &request(OsFamily::Debian, "Debian", RawParameters::default())).unwrap();

        assert_eq!(plan.config.sha256, Some(content_digest(plan.config_text())));
    }
}
