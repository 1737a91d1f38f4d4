use scanprint::core::{ResourceIndex, ScanResults};
use scanprint::render::{
    Column, FormatVersion, RenderConfig, Renderer, display_order, footer_row, group_outcomes,
    severity_buckets,
};

fn load() -> ScanResults {
    serde_json::from_str(include_str!("golden/results.json")).expect("parse golden results")
}

fn renderer(verbose: bool) -> Renderer {
    Renderer::new(RenderConfig {
        verbose,
        ..RenderConfig::default()
    })
}

#[test]
fn terse_report_matches_golden() {
    let actual = renderer(false).render(&load());
    assert_eq!(actual, include_str!("golden/terse.txt"));
}

#[test]
fn verbose_report_matches_golden() {
    let actual = renderer(true).render(&load());
    assert_eq!(actual, include_str!("golden/verbose.txt"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let results = load();
    let before = results.clone();
    for verbose in [false, true] {
        let r = renderer(verbose);
        assert_eq!(r.render(&results), r.render(&results));
    }
    assert_eq!(results, before, "rendering must not mutate the input");
}

#[test]
fn table_row_order_is_independent_of_input_order() {
    let results = load();
    let mut shuffled = results.clone();
    shuffled.summary.controls.reverse();
    shuffled.resources.reverse();
    for verbose in [false, true] {
        let r = renderer(verbose);
        assert_eq!(r.render(&results), r.render(&shuffled));
    }
}

#[test]
fn listed_resources_never_exceed_evaluated_resources() {
    let results = load();
    let index = ResourceIndex::new(&results.resources);
    for control in &results.summary.controls {
        for verbose in [false, true] {
            let groups = group_outcomes(control, &index, verbose);
            assert!(
                groups.line_count() <= control.resources.len(),
                "control {}",
                control.id
            );
            if control.status.is_skipped() {
                assert!(groups.is_empty(), "control {}", control.id);
            }
        }
    }
}

#[test]
fn footer_reflects_report_totals_not_rendered_rows() {
    let results = load();
    let footer = footer_row(&results.summary);
    assert_eq!(footer.get(Column::Failed), "3");
    assert_eq!(footer.get(Column::Excluded), "1");
    assert_eq!(footer.get(Column::Total), "8");
    assert_eq!(footer.get(Column::RiskScore), "37.50%");
}

#[test]
fn display_order_starts_with_critical() {
    let results = load();
    let buckets = severity_buckets(&results.summary.controls);
    let order: Vec<&str> = display_order(&buckets).map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["C-0035", "C-0057", "C-0081", "C-0099", "C-0076"]);
}

#[test]
fn v2_verbose_lists_resources_then_summary() {
    let r = Renderer::new(RenderConfig {
        verbose: true,
        format_version: FormatVersion::V2,
        ..RenderConfig::default()
    });
    let out = r.render(&load());

    assert!(!out.contains("[control:"), "{out}");
    let resources = out.find("FAILED CONTROLS").expect("resource table");
    let summary = out.find("CONTROL NAME").expect("summary table");
    assert!(resources < summary);
    assert!(out.contains("Deployment - web "), "{out}");
    assert!(
        out.contains("ClusterRoleBinding - crb-admin [ClusterRole - cluster-admin, User - alice]"),
        "{out}"
    );
    assert!(!out.contains("Deployment - cache"), "passed-only resources are not listed: {out}");
}

#[test]
fn docs_base_url_is_configurable() {
    let r = Renderer::new(RenderConfig {
        verbose: true,
        docs_base_url: "https://docs.example.test/controls/".to_string(),
        ..RenderConfig::default()
    });
    let out = r.render(&load());
    assert!(out.contains("[control: Privileged container - https://docs.example.test/controls/c-0057]"));
}
