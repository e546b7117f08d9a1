use std::path::Path;

use proptest::prelude::*;

use scoop_search::manifest::Manifest;
use scoop_search::remote::{TreeEntry, matching_manifests, name_pattern};
use scoop_search::search::matcher::match_manifest;
use scoop_search::search::{Match, sort_matches};

fn manifest(stem: &str, raw: &str) -> Manifest {
    Manifest::parse(Path::new(&format!("{stem}.json")), raw).unwrap()
}

fn normalized(name: &str) -> String {
    name.to_lowercase().replace('-', "")
}

proptest! {
    #[test]
    fn test_name_match_ignores_case(stem in "[A-Za-z0-9-]{1,16}", start in 0usize..16, len in 0usize..16) {
        let lower = stem.to_lowercase();
        let start = start.min(lower.len());
        let end = (start + len).min(lower.len());
        let term = &lower[start..end];

        let found = match_manifest(manifest(&stem, "{}"), term);
        prop_assert_eq!(found, Some(Match::by_name(stem.clone(), "")));
    }

    #[test]
    fn test_bin_label_is_bare_file_name(dir in "[a-z]{1,8}", exe in "[a-z]{1,8}", ext in "(exe|cmd|ps1)") {
        let raw = format!(r#"{{"bin": "{dir}/{exe}.{ext}"}}"#);
        let found = match_manifest(manifest("1234", &raw), &exe);
        prop_assert_eq!(found.map(|m| m.bin), Some(format!("{exe}.{ext}")));
    }

    #[test]
    fn test_sort_orders_by_normalized_name(names in prop::collection::vec("[A-Za-z-]{0,6}", 0..24)) {
        let mut matches: Vec<_> = names.iter().map(|name| Match::by_name(name.clone(), "")).collect();
        sort_matches(&mut matches);

        for pair in matches.windows(2) {
            prop_assert!(normalized(&pair[0].name) <= normalized(&pair[1].name));
        }
    }

    #[test]
    fn test_sort_keeps_encounter_order_for_ties(count in 1usize..8) {
        let mut matches: Vec<_> = (0..count)
            .map(|idx| Match::by_name(if idx % 2 == 0 { "Z-ip" } else { "zip" }, idx.to_string()))
            .collect();
        sort_matches(&mut matches);

        let versions: Vec<_> = matches.iter().map(|m| m.version.clone()).collect();
        let expected: Vec<_> = (0..count).map(|idx| idx.to_string()).collect();
        prop_assert_eq!(versions, expected);
    }

    #[test]
    fn test_remote_pattern_accepts_any_term(term in ".*") {
        let pattern = name_pattern(&term);
        prop_assert!(pattern.is_ok());
    }

    #[test]
    fn test_remote_pattern_finds_embedded_term(prefix in "[a-z]{0,5}", term in "[a-z0-9+.]{1,5}", suffix in "[a-z]{0,5}") {
        let name = format!("{prefix}{term}{suffix}");
        let tree = vec![TreeEntry { path: format!("bucket/{name}.json") }];
        let found = matching_manifests(&tree, &name_pattern(&term.to_uppercase()).unwrap());
        prop_assert_eq!(found, vec![Match::by_name(name, "")]);
    }
}
