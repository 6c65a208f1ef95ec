//! Property tests for the parser and aggregator.

use nfs_latency::latency::LatencyCollection;
use nfs_latency::trace::{parse_line, read_trace};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = Vec<(i64, u32)>> {
    // (procedure, elapsed in microseconds)
    prop::collection::vec((0i64..30, 0u32..1_000_000), 1..6)
}

fn render_line(pairs: &[(i64, u32)]) -> String {
    let procs: Vec<String> = pairs.iter().map(|(p, _)| p.to_string()).collect();
    let times: Vec<String> = pairs
        .iter()
        .map(|(_, us)| format!("{:.6}", *us as f64 / 1e6))
        .collect();
    format!("{}\t{}\n", procs.join(","), times.join(","))
}

fn ingest(lines: &[String]) -> LatencyCollection {
    let mut latencies = LatencyCollection::new();
    read_trace(lines.concat().as_bytes(), &mut latencies).unwrap();
    latencies
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_count_matches_occurrences(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let rendered: Vec<String> = lines.iter().map(|l| render_line(l)).collect();
        let latencies = ingest(&rendered);

        for proc in 0i64..30 {
            let expected = lines.iter().flatten().filter(|(p, _)| *p == proc).count();
            let got = latencies.summarize(proc, false).map(|s| s.count).unwrap_or(0);
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn prop_mean_independent_of_line_order(lines in prop::collection::vec(line_strategy(), 1..20)) {
        let rendered: Vec<String> = lines.iter().map(|l| render_line(l)).collect();
        let mut reversed = rendered.clone();
        reversed.reverse();

        let forward = ingest(&rendered);
        let backward = ingest(&reversed);

        prop_assert_eq!(forward.len(), backward.len());
        for (proc, _) in forward.iter() {
            let a = forward.summarize(proc, true).unwrap();
            let b = backward.summarize(proc, true).unwrap();
            prop_assert_eq!(a.count, b.count);
            prop_assert!((a.mean_us - b.mean_us).abs() < 1e-6);
            prop_assert!((a.p50_us.unwrap() - b.p50_us.unwrap()).abs() < 1e-6);
            prop_assert!((a.p90_us.unwrap() - b.p90_us.unwrap()).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_mismatched_line_contributes_nothing(
        procs in prop::collection::vec(0i64..30, 1..6),
        extra in 1usize..4,
    ) {
        let times: Vec<&str> = std::iter::repeat("0.001").take(procs.len() + extra).collect();
        let procs_field: Vec<String> = procs.iter().map(i64::to_string).collect();
        let line = format!("{}\t{}", procs_field.join(","), times.join(","));
        prop_assert!(parse_line(&line).is_err());

        let latencies = ingest(&[format!("{}\n", line), "5\t0.002\n".to_string()]);
        prop_assert_eq!(latencies.procs().collect::<Vec<_>>(), vec![5]);
        prop_assert_eq!(latencies.total_samples(), 1);
    }

    #[test]
    fn prop_parse_never_panics(line in "\\PC*") {
        let _ = parse_line(&line);
    }
}
