//! Property tests for identity normalization and resolver purity.

use std::path::{Component, Path};

use proptest::prelude::*;

use crate::{AnalyzerConfig, MemoryFileSystem, ModuleId, Resolution, SpecifierResolver};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

proptest! {
    #[test]
    fn module_id_normalization_is_idempotent(
        segments in prop::collection::vec(segment(), 1..6)
    ) {
        let path = format!("/proj/{}", segments.join("/"));
        let once = ModuleId::new(&path);
        let twice = ModuleId::new(once.as_path());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dot_segments_never_survive_normalization(
        segments in prop::collection::vec(segment(), 1..5)
    ) {
        let noisy = format!("/proj/./{}/../{}", segments.join("/./"), segments.join("/"));
        let id = ModuleId::new(noisy);
        let no_dot_segments = id
            .as_path()
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir));
        prop_assert!(no_dot_segments);
    }

    #[test]
    fn resolution_is_a_pure_function(name in segment()) {
        let file = format!("/proj/src/{name}.ts");
        let fs = MemoryFileSystem::with_files([file.clone()]);
        let config = AnalyzerConfig::default();
        let resolver = SpecifierResolver::new(&config, &fs);
        let specifier = format!("./{name}");

        let first = resolver.resolve(&specifier, Path::new("/proj/src")).unwrap();
        let second = resolver.resolve(&specifier, Path::new("/proj/src")).unwrap();
        prop_assert_eq!(first.clone(), second);
        prop_assert_eq!(first, Resolution::Resolved(ModuleId::new(file)));
    }
}
