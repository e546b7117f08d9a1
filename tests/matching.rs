use scoop_search::search::match_manifests;
use scoop_search::test_utils::fixtures::BucketFixture;
use scoop_search::test_utils::{TestCase, run_table_tests};

/// Returns `(name, bin label)` of the single match for `(manifest, term)`.
fn single_match(input: (&str, &str)) -> Option<(String, String)> {
    let (raw, term) = input;
    let fixture = BucketFixture::new();
    fixture.add_manifest("main", "pkg", raw);
    let mut matches = match_manifests(&fixture.buckets_dir().join("main/bucket"), term).unwrap();
    assert!(matches.len() <= 1);
    matches.pop().map(|found| (found.name, found.bin))
}

fn hit(bin: &str) -> Option<(String, String)> {
    Some(("pkg".to_string(), bin.to_string()))
}

#[test]
fn bin_matching_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "no bin",
            input: (r#"{"version": "1"}"#, "tool"),
            expected: None,
        },
        TestCase {
            name: "name wins",
            input: (r#"{"bin": "other.exe"}"#, "PK"),
            expected: hit(""),
        },
        TestCase {
            name: "single string",
            input: (r#"{"bin": "bin/my-tool.exe"}"#, "tool"),
            expected: hit("my-tool.exe"),
        },
        TestCase {
            name: "windows separators",
            input: (r#"{"bin": "libexec\\Tool.CMD"}"#, "tool"),
            expected: hit("Tool.CMD"),
        },
        TestCase {
            name: "extension ignored",
            input: (r#"{"bin": "bin/run.exe"}"#, "exe"),
            expected: None,
        },
        TestCase {
            name: "second entry",
            input: (r#"{"bin": ["bin/tool.exe", "bin/tool-cli.exe"]}"#, "cli"),
            expected: hit("tool-cli.exe"),
        },
        TestCase {
            name: "first of several",
            input: (r#"{"bin": ["a-cli.exe", "b-cli.exe"]}"#, "cli"),
            expected: hit("a-cli.exe"),
        },
        TestCase {
            name: "shim alias",
            input: (r#"{"bin": [["bin/node.exe", "nodejs", "--flag"]]}"#, "nodejs"),
            expected: hit("nodejs"),
        },
        TestCase {
            name: "shim without alias",
            input: (r#"{"bin": [["bin/deno.exe"]]}"#, "deno"),
            expected: hit("deno.exe"),
        },
    ];

    run_table_tests(cases, single_match)
}
