pub const EXAMPLES: &str = r#"EXAMPLES:

1) Default benchmark against local servers:

    Runs 50 trials over payload sizes 1, 5, 10, 25, 50, 100, 500 and 1000 users,
    REST on http://localhost:8000/user/bulk and gRPC on localhost:50052:

    $ cargo r --bin transport-bench -r

2) Quick run with a few sizes and a bounded per-call deadline:

    $ cargo r --bin transport-bench -r -- --sizes 1,10,100 --trials 3 --request-timeout 5s

3) Remote servers, keep going when a trial fails:

    $ cargo r --bin transport-bench -r -- --rest-url http://10.0.0.5:8000/user/bulk --grpc-address 10.0.0.5:50052 --on-failure skip-trial

4) Settings from a file, overridden by TRANSPORT_BENCH_* environment variables and flags:

    $ TRANSPORT_BENCH_TRIALS=10 cargo r --bin transport-bench -r -- --config bench.toml

    Log verbosity is controlled with RUST_LOG, e.g. RUST_LOG=debug prints every call.
"#;
