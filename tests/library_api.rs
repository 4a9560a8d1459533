mod common;

use std::cell::Cell;

use common::TestContext;
use ntpconf::{
    AppError, OsFamily, PlatformIdentity, RawParameters, RenderRequest, ResolvedConfig,
    TemplateEvaluator, TemplateOverride,
};

struct UppercaseHosts {
    calls: Cell<usize>,
}

impl TemplateEvaluator for UppercaseHosts {
    fn evaluate(
        &self,
        template: &TemplateOverride,
        context: &ResolvedConfig,
    ) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        let mut out = format!("# {}\n", template.id());
        for host in context.server_hosts() {
            out.push_str(&host.to_uppercase());
            out.push('\n');
        }
        Ok(out)
    }
}

#[test]
fn plan_with_custom_evaluator() {
    let raw = RawParameters {
        servers: Some(vec!["a.example".to_string()]),
        config_epp: Some("site".to_string()),
        ..Default::default()
    };
    let request =
        RenderRequest::new(PlatformIdentity::new(OsFamily::Debian, "Debian", "12", false), raw);
    let evaluator = UppercaseHosts { calls: Cell::new(0) };

    let plan = ntpconf::plan_with(&request, &evaluator).unwrap();

    assert_eq!(plan.config_text(), "# site\nA.EXAMPLE\n");
    assert_eq!(evaluator.calls.get(), 1);
}

#[test]
fn load_request_then_render_config() {
    let ctx = TestContext::new();
    let path = ctx.write_request(
        "site/request.yml",
        "facts:\n  family: Archlinux\nparameters:\n  servers: [time.example]\n  logfile: /var/log/ntp.log\n",
    );

    let request = ntpconf::load_request(&path).unwrap();
    let text = ntpconf::render_config(&request, ctx.work_dir()).unwrap();

    assert!(text.starts_with("server time.example\n"));
    assert!(text.ends_with("driftfile /var/lib/ntp/ntp.drift\nlogfile /var/log/ntp.log\n"));
}

#[test]
fn pipeline_pieces_compose() {
    let identity = PlatformIdentity::new(OsFamily::RedHat, "Fedora", "38", false);
    let defaults = ntpconf::resolve_platform(&identity).unwrap();
    let config = ntpconf::normalize(&RawParameters::default(), &defaults, &identity).unwrap();

    let artifacts = ntpconf::resolve_auxiliaries(&config, &defaults);
    assert_eq!(artifacts.len(), 1);
    assert!(ntpconf::system_directives(&config).is_empty());
    assert!(ntpconf::render_directives(&config).starts_with("server 0.fedora.pool.ntp.org\n"));
}
