pub const DEFAULT_REST_URL: &str = "http://localhost:8000/user/bulk";
pub const DEFAULT_GRPC_ADDRESS: &str = "localhost:50052";
pub const DEFAULT_PAYLOAD_SIZES: [u32; 8] = [1, 5, 10, 25, 50, 100, 500, 1000];
pub const DEFAULT_TRIALS: u32 = 50;
pub const ENV_PREFIX: &str = "TRANSPORT_BENCH_";
