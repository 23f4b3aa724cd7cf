use std::fmt::Write;

use crate::model::scores::{ScoreResult, Verdict};
use crate::report::{format_f64_6, format_opt_6};

pub fn render_result_text(result: &ScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "method\t{}", result.method.as_str());
    let _ = writeln!(out, "n_tracks\t{}", result.n_tracks);
    let _ = writeln!(out, "n_groups\t{}", result.n_groups);
    if result.efficiencies.is_some() {
        let _ = writeln!(out, "avg_efficiency\t{}", format_opt_6(result.avg_efficiency));
    }
    let _ = writeln!(
        out,
        "reconstruction_efficiency\t{}",
        format_f64_6(result.reconstruction_efficiency)
    );
    let _ = writeln!(out, "ghost_rate\t{}", format_f64_6(result.ghost_rate));
    let _ = writeln!(out, "clone_rate\t{}", format_f64_6(result.clone_rate));

    out.push('\n');
    out.push_str("label\tn_hits\ttrack_id\tefficiency\tverdict\n");
    for g in &result.groups {
        let track = g.track_id.map(|t| t.to_string()).unwrap_or_else(|| "NA".to_string());
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            g.label,
            g.n_hits,
            track,
            format_opt_6(g.efficiency),
            verdict_name(g.verdict)
        );
    }
    out
}

fn verdict_name(v: Verdict) -> &'static str {
    match v {
        Verdict::Reconstructed => "reconstructed",
        Verdict::Clone => "clone",
        Verdict::Ghost => "ghost",
    }
}
