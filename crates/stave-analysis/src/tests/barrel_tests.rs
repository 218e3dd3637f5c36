//! Barrel classification, expansion, and cycles that only close through a
//! barrel's export set.

use std::path::Path;

use super::test_helpers::{analyze, imports, session_with_files};
use crate::{AliasTable, AnalyzerConfig, ModuleId, ModuleStatement};

#[test]
fn classifier_matches_entry_point_names_only() {
    let config = AnalyzerConfig::default();

    assert!(config.is_barrel(Path::new("/p/src/pages/index.ts")));
    assert!(config.is_barrel(Path::new("/p/src/index.tsx")));
    assert!(!config.is_barrel(Path::new("/p/src/pages/home.ts")));
    assert!(!config.is_barrel(Path::new("/p/src/indexer.ts")));
    assert!(!config.is_barrel(Path::new("/p/src/index.css")));
}

#[test]
fn classifier_honors_configured_names() {
    let config = AnalyzerConfig::default().barrel_names(["mod.ts"]);

    assert!(config.is_barrel(Path::new("/p/src/pages/mod.ts")));
    assert!(!config.is_barrel(Path::new("/p/src/pages/index.ts")));
}

#[test]
fn analyzing_a_barrel_caches_its_export_set() {
    let files = [
        "/p/src/pages/index.ts",
        "/p/src/pages/home.ts",
        "/p/src/pages/about.ts",
    ];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    let statements = [
        ModuleStatement::export_all("./home"),
        ModuleStatement::import("./about"),
    ];
    session.analyze_file(Path::new("/p/src/pages/index.ts"), &statements);

    // Importing the barrel now widens the importer's edges to the cached set.
    let report = analyze(&mut session, "/p/src/app.ts", &["./pages"]);
    assert!(!report.has_cycles());

    let edges = session.graph().edges_of(&ModuleId::new("/p/src/app.ts"));
    assert!(edges.contains(&ModuleId::new("/p/src/pages/index.ts")));
    assert!(edges.contains(&ModuleId::new("/p/src/pages/home.ts")));
    assert!(edges.contains(&ModuleId::new("/p/src/pages/about.ts")));
}

#[test]
fn cycle_through_barrel_is_reported_without_direct_import() {
    // y.ts imports ../app.ts; the barrel re-exports y; app imports only the
    // barrel. The synthetic edge app -> y closes the loop.
    let files = [
        "/p/src/app.ts",
        "/p/src/pages/index.ts",
        "/p/src/pages/y.ts",
    ];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/pages/y.ts", &["../app"]);
    session.analyze_file(
        Path::new("/p/src/pages/index.ts"),
        &imports(&["./y"]),
    );

    let report = analyze(&mut session, "/p/src/app.ts", &["./pages"]);
    let cycle = report.cycles().next().expect("cycle through barrel");
    assert_eq!(
        cycle.path,
        vec![
            ModuleId::new("/p/src/app.ts"),
            ModuleId::new("/p/src/pages/y.ts"),
            ModuleId::new("/p/src/app.ts"),
        ]
    );
}

#[test]
fn barrel_cycle_via_alias_import() {
    let files = [
        "/p/src/a.ts",
        "/p/src/pages/cycle/index.ts",
        "/p/src/pages/cycle/b.ts",
    ];
    let aliases = AliasTable::new("/p").rule("@pages/*", ["src/pages/*"]);
    let mut session = session_with_files(AnalyzerConfig::new(aliases), &files);

    analyze(&mut session, "/p/src/pages/cycle/b.ts", &["../../a"]);
    analyze(&mut session, "/p/src/pages/cycle/index.ts", &["./b"]);

    // The alias resolves to the barrel directory's index file; expansion
    // pulls in b, whose recorded edges already reach back to a.
    let report = analyze(&mut session, "/p/src/a.ts", &["@pages/cycle"]);
    assert!(report.has_cycles());
}

#[test]
fn unprocessed_barrel_underapproximates() {
    // The barrel was never analyzed this session, so its export set is
    // unknown and the loop through it stays invisible. Deliberate
    // trade-off: stale expansion must not invent edges.
    let files = [
        "/p/src/app.ts",
        "/p/src/pages/index.ts",
        "/p/src/pages/y.ts",
    ];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/pages/y.ts", &["../app"]);
    let report = analyze(&mut session, "/p/src/app.ts", &["./pages"]);

    assert!(!report.has_cycles());
    let edges = session.graph().edges_of(&ModuleId::new("/p/src/app.ts"));
    assert!(!edges.contains(&ModuleId::new("/p/src/pages/y.ts")));
}

#[test]
fn reprocessing_a_barrel_replaces_its_export_set() {
    let files = [
        "/p/src/app.ts",
        "/p/src/pages/index.ts",
        "/p/src/pages/y.ts",
        "/p/src/pages/z.ts",
    ];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/pages/index.ts", &["./y", "./z"]);
    // The barrel drops ./y on re-analysis; the cache entry is overwritten,
    // not merged.
    analyze(&mut session, "/p/src/pages/index.ts", &["./z"]);

    analyze(&mut session, "/p/src/app.ts", &["./pages"]);
    let edges = session.graph().edges_of(&ModuleId::new("/p/src/app.ts"));
    assert!(edges.contains(&ModuleId::new("/p/src/pages/z.ts")));
    assert!(!edges.contains(&ModuleId::new("/p/src/pages/y.ts")));
}

#[test]
fn barrel_importing_its_own_subtree_is_not_a_cycle() {
    let files = ["/p/src/pages/index.ts", "/p/src/pages/home.ts"];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    // home.ts reaches back at the barrel, as re-exported modules often do.
    analyze(&mut session, "/p/src/pages/home.ts", &["./"]);

    // The barrel aggregating home.ts must not be flagged for it.
    let report = analyze(&mut session, "/p/src/pages/index.ts", &["./home"]);
    assert!(!report.has_cycles());
}

#[test]
fn barrel_self_import_is_still_reported() {
    let mut session =
        session_with_files(AnalyzerConfig::default(), &["/p/src/pages/index.ts"]);

    let report = analyze(&mut session, "/p/src/pages/index.ts", &["./index.ts"]);
    let cycle = report.cycles().next().expect("self-import of a barrel");
    assert!(cycle.is_self_import());
}

#[test]
fn barrel_cycle_outside_its_subtree_is_reported() {
    // Two barrels aggregating each other's directories is a real cycle.
    let files = [
        "/p/src/a/index.ts",
        "/p/src/b/index.ts",
    ];
    let mut session = session_with_files(AnalyzerConfig::default(), &files);

    analyze(&mut session, "/p/src/b/index.ts", &["../a"]);
    let report = analyze(&mut session, "/p/src/a/index.ts", &["../b"]);

    assert!(report.has_cycles());
}
