use clap::Parser;
use http_json_graphite::config::Args;
use regex::Regex;
use std::sync::LazyLock;

const COMMAND: &str = "$ metrics-http-json ";
const NEGATIVE_INDICATOR: &str = "✖";

static POSITIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\$ metrics-http-json\s+(.+?)\s*$"#).unwrap());
static NEGATIVE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\$ metrics-http-json\s+(.+?)\s+✖"#).unwrap());

struct Example {
    line_no: usize,
    args: Vec<String>,
    valid: bool,
}

fn extract_examples(filename: &str) -> Vec<Example> {
    use std::fs::read_to_string;

    let readme = read_to_string(filename).expect("Failed to read file");

    let mut examples = vec![];

    for (i, line) in readme.lines().enumerate() {
        let line_no = i + 1;
        if !line.starts_with(COMMAND) {
            continue;
        }
        let valid = !line.contains(NEGATIVE_INDICATOR);
        let pattern = if valid {
            &POSITIVE_PATTERN
        } else {
            &NEGATIVE_PATTERN
        };
        let caps = pattern
            .captures(line)
            .unwrap_or_else(|| panic!("Line {} looks like an example but didn’t match", line_no));

        // split CLI-style string into args
        let args = shell_words::split(caps.get(1).unwrap().as_str())
            .map_err(|e| format!("{} line {}: error {}", filename, line_no, e))
            .unwrap();

        examples.push(Example {
            line_no,
            args,
            valid,
        });
    }

    examples
}

#[test]
fn test_readme_examples() {
    let filename = "README.md";
    let examples = extract_examples(filename);

    assert!(!examples.is_empty(), "No examples found in README.md.");
    println!("✅ Found {} examples in {}", examples.len(), filename);

    for example in examples {
        let args = std::iter::once("metrics-http-json".to_string()).chain(example.args);
        let parsed = Args::try_parse_from(args);
        assert_eq!(
            parsed.is_ok(),
            example.valid,
            "{} line {}: {:?}",
            filename,
            example.line_no,
            parsed.err()
        );
    }
}
