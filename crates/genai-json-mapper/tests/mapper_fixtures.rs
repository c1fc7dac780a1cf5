mod common;

use genai_json_mapper::SchemaMapper;

use common::fixtures::{backend_for, load_backends, load_cases, MapperCase, SCENARIOS};

fn run_case(case: &MapperCase, mapper: &SchemaMapper) -> Result<(), String> {
    let result = mapper.convert(case.entity, case.direction, &case.input);
    match (&case.expected, &case.error, result) {
        (Some(expected), None, Ok(actual)) if &actual == expected => Ok(()),
        (Some(expected), None, Ok(actual)) => Err(format!(
            "output mismatch\n  expected: {expected}\n  actual:   {actual}"
        )),
        (None, Some(message), Err(err)) if &err.to_string() == message => Ok(()),
        (None, Some(message), Err(err)) => Err(format!(
            "error mismatch\n  expected: {message}\n  actual:   {err}"
        )),
        (Some(_), None, Err(err)) => Err(format!("unexpected error: {err}")),
        (None, Some(message), Ok(actual)) => {
            Err(format!("expected error {message:?}, got {actual}"))
        }
        _ => Err("case must set exactly one of `expected` and `error`".to_string()),
    }
}

#[test]
fn fixture_counts_match() {
    for (scenario, count) in SCENARIOS {
        assert_eq!(load_cases(scenario).len(), *count, "scenario {scenario}");
    }
}

#[test]
fn fixtures_replay() {
    let backends = load_backends();
    let mut failures = Vec::new();
    for (scenario, _) in SCENARIOS {
        for case in load_cases(scenario) {
            let mapper = SchemaMapper::new(backend_for(&case, &backends));
            if let Err(reason) = run_case(&case, &mapper) {
                failures.push(format!("{scenario}/{}: {reason}", case.name));
            }
        }
    }
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}
