//! Built-in ntp.conf layout.
//!
//! Blocks are emitted in a fixed order. A block with nothing to say contributes
//! no lines at all, so disabling one directive never shifts the formatting of
//! another.

use crate::domain::parameters::{ResolvedConfig, ServerEntry};

const LOCAL_CLOCK: &str = "127.127.1.0";

/// Render the configuration text with the built-in layout.
pub fn render_directives(config: &ResolvedConfig) -> String {
    let mut out = Lines::default();

    servers(&mut out, &config.servers);
    peers(&mut out, config);
    interfaces(&mut out, config);
    restrict(&mut out, config);
    keys(&mut out, config);
    switches(&mut out, config);
    tos(&mut out, config);
    local_clock(&mut out, config);
    tinker(&mut out, config);
    poll_bounds(&mut out, config);
    paths(&mut out, config);

    out.finish()
}

/// Line accumulator; every pushed line gets exactly one trailing newline.
#[derive(Default)]
struct Lines(String);

impl Lines {
    fn push(&mut self, line: impl AsRef<str>) {
        self.0.push_str(line.as_ref());
        self.0.push('\n');
    }

    fn finish(self) -> String {
        self.0
    }
}

/// Format a `server` line. Modifier order: iburst, prefer, maxpoll, noselect.
pub fn server_line(server: &ServerEntry) -> String {
    let mut line = format!("server {}", server.host);
    if server.iburst {
        line.push_str(" iburst");
    }
    if server.prefer {
        line.push_str(" prefer");
    }
    if let Some(maxpoll) = server.maxpoll {
        line.push_str(&format!(" maxpoll {}", maxpoll));
    }
    if server.noselect {
        line.push_str(" noselect");
    }
    line
}

fn servers(out: &mut Lines, servers: &[ServerEntry]) {
    for server in servers {
        out.push(server_line(server));
    }
}

fn peers(out: &mut Lines, config: &ResolvedConfig) {
    for peer in &config.peers {
        out.push(format!("peer {}", peer));
    }
}

fn interfaces(out: &mut Lines, config: &ResolvedConfig) {
    let rules = &config.interfaces;
    if rules.listen.is_empty() {
        return;
    }
    for rule in &rules.ignore {
        out.push(format!("interface ignore {}", rule));
    }
    for addr in &rules.listen {
        out.push(format!("interface listen {}", addr));
    }
}

fn restrict(out: &mut Lines, config: &ResolvedConfig) {
    for rule in &config.restrict {
        out.push(format!("restrict {}", rule));
    }
}

fn keys(out: &mut Lines, config: &ResolvedConfig) {
    let keys = &config.keys;
    if !keys.enable {
        return;
    }
    out.push(format!("keys {}", keys.file));
    if !keys.trusted.is_empty() {
        out.push(format!("trustedkey {}", join(&keys.trusted)));
    }
    if let Some(id) = keys.controlkey {
        out.push(format!("controlkey {}", id));
    }
    if let Some(id) = keys.requestkey {
        out.push(format!("requestkey {}", id));
    }
}

fn switches(out: &mut Lines, config: &ResolvedConfig) {
    let flags = [
        (config.disable_auth, "disable auth"),
        (config.disable_kernel, "disable kernel"),
        (config.disable_monitor, "disable monitor"),
        (config.broadcastclient, "broadcastclient"),
    ];
    for (_, line) in flags.iter().filter(|(on, _)| *on) {
        out.push(line);
    }
}

fn tos(out: &mut Lines, config: &ResolvedConfig) {
    let tos = &config.tos;
    if !tos.enable {
        return;
    }
    let options = [
        ("minclock", tos.minclock),
        ("minsane", tos.minsane),
        ("floor", tos.floor),
        ("ceiling", tos.ceiling),
        ("cohort", tos.cohort.map(u32::from)),
    ];
    out.push(with_options("tos", &options));
}

fn local_clock(out: &mut Lines, config: &ResolvedConfig) {
    if !config.is_virtual {
        out.push(format!("server {}", LOCAL_CLOCK));
        out.push(format!("fudge {} stratum {}", LOCAL_CLOCK, config.udlc_stratum));
    }
    for line in &config.fudge {
        out.push(format!("fudge {}", line));
    }
}

// Virtual hosts always get `tinker panic 0`, whatever tinker/panic say.
fn tinker(out: &mut Lines, config: &ResolvedConfig) {
    if config.is_virtual {
        out.push("tinker panic 0");
        return;
    }
    let tinker = &config.tinker;
    if !tinker.enable || (tinker.panic.is_none() && tinker.stepout.is_none()) {
        return;
    }
    out.push(with_options("tinker", &[("panic", tinker.panic), ("stepout", tinker.stepout)]));
}

fn poll_bounds(out: &mut Lines, config: &ResolvedConfig) {
    let bounds = [
        ("minpoll", config.poll.minpoll.map(u32::from)),
        ("maxpoll", config.poll.maxpoll.map(u32::from)),
    ];
    let set: Vec<String> = bounds
        .iter()
        .filter_map(|(name, value)| value.map(|v| format!("{} {}", name, v)))
        .collect();
    if !set.is_empty() {
        out.push(set.join(" "));
    }
}

fn paths(out: &mut Lines, config: &ResolvedConfig) {
    out.push(format!("driftfile {}", config.driftfile));
    let optional = [
        ("leapfile", &config.leapfile),
        ("logfile", &config.logfile),
        ("ntpsigndsocket", &config.ntpsigndsocket),
        ("authprov", &config.authprov),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            out.push(format!("{} {}", name, value));
        }
    }
}

fn with_options(directive: &str, options: &[(&str, Option<u32>)]) -> String {
    let mut line = directive.to_string();
    for (name, value) in options {
        if let Some(value) = value {
            line.push_str(&format!(" {} {}", name, value));
        }
    }
    line
}

fn join(ids: &[u32]) -> String {
    ids.iter().map(u32::to_string).collect::<Vec<_>>().join(" ")
}
