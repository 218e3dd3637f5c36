//! Edge cases around failure handling, graph hygiene, and report shape.

use std::path::Path;

use super::test_helpers::{analyze, session_with_files};
use crate::{
    AliasTable, AnalyzerConfig, ModuleId, ModuleStatement, ResolutionOutcome,
};

#[test]
fn empty_statement_list_still_clears_the_node() {
    let mut session = session_with_files(AnalyzerConfig::default(), &["/p/src/a.ts"]);

    analyze(&mut session, "/p/src/a.ts", &["./a"]);
    let report = session.analyze_file(Path::new("/p/src/a.ts"), &[]);

    assert!(report.outcomes.is_empty());
    assert!(session.graph().edges_of(&ModuleId::new("/p/src/a.ts")).is_empty());
}

#[test]
fn external_specifiers_never_enter_the_graph() {
    let mut session = session_with_files(AnalyzerConfig::default(), &["/p/src/a.ts"]);

    let report = analyze(&mut session, "/p/src/a.ts", &["react", "react", "lodash/merge"]);

    assert!(report.outcomes.iter().all(|o| matches!(
        o.resolution,
        ResolutionOutcome::External { .. }
    )));
    assert!(!session.graph().contains(&ModuleId::new("react")));
    assert_eq!(session.graph().node_count(), 1); // just the analyzed file
    assert!(!report.has_cycles());
}

#[test]
fn unresolved_specifiers_are_excluded_silently() {
    let mut session = session_with_files(AnalyzerConfig::default(), &["/p/src/a.ts"]);

    let report = analyze(&mut session, "/p/src/a.ts", &["./missing"]);

    assert!(matches!(
        report.outcomes[0].resolution,
        ResolutionOutcome::Unresolved { .. }
    ));
    assert!(session.graph().edges_of(&ModuleId::new("/p/src/a.ts")).is_empty());
}

#[test]
fn configuration_error_does_not_abort_the_file() {
    let files = ["/p/src/a.ts", "/p/src/b.ts"];
    let aliases = AliasTable::new("/p").rule("@broken/*", Vec::<String>::new());
    let mut session = session_with_files(AnalyzerConfig::new(aliases), &files);

    let report = analyze(&mut session, "/p/src/a.ts", &["@broken/x", "./b"]);

    assert_eq!(report.resolution_errors().count(), 1);
    // The statement after the error still resolved and recorded its edge.
    assert!(matches!(
        report.outcomes[1].resolution,
        ResolutionOutcome::Resolved { .. }
    ));
    assert!(session.graph().has_edge(
        &ModuleId::new("/p/src/a.ts"),
        &ModuleId::new("/p/src/b.ts")
    ));
}

#[test]
fn outcomes_keep_statement_order() {
    let files = ["/p/src/a.ts", "/p/src/b.ts"];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    let statements = [
        ModuleStatement::import("react"),
        ModuleStatement::import("./b"),
        ModuleStatement::export_all("./missing"),
    ];
    let report = session.analyze_file(Path::new("/p/src/a.ts"), &statements);

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.outcomes[0].statement.specifier, "react");
    assert_eq!(report.outcomes[1].statement.specifier, "./b");
    assert_eq!(report.outcomes[2].statement.specifier, "./missing");
}

#[test]
fn messy_specifiers_collapse_to_one_node() {
    let files = ["/p/src/a.ts", "/p/src/lib/helper.ts"];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(
        &mut session,
        "/p/src/a.ts",
        &["./lib/helper", "./lib/../lib/helper.ts"],
    );

    let edges = session.graph().edges_of(&ModuleId::new("/p/src/a.ts"));
    assert_eq!(edges, vec![ModuleId::new("/p/src/lib/helper.ts")]);
}

#[test]
fn reports_serialize_for_host_consumption() {
    let files = ["/p/src/a.ts", "/p/src/b.ts"];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/b.ts", &["./a"]);
    let report = analyze(&mut session, "/p/src/a.ts", &["./b"]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["file"], "/p/src/a.ts");
    assert_eq!(json["outcomes"][0]["resolution"]["kind"], "resolved");
    let cycle_path = json["outcomes"][0]["cycle"]["path"].as_array().unwrap();
    assert_eq!(cycle_path.len(), 3);
}

#[test]
fn cycle_diagnostic_chain_is_joined_directionally() {
    let files = ["/p/src/a.ts", "/p/src/b.ts"];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/b.ts", &["./a"]);
    let report = analyze(&mut session, "/p/src/a.ts", &["./b"]);

    let chain = report.cycles().next().unwrap().format_chain();
    assert_eq!(chain.matches(" -> ").count(), 2);
    assert!(chain.starts_with("/p/src/a.ts"));
    assert!(chain.ends_with("/p/src/a.ts"));
}
