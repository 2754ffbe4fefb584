pub mod compile_time {
    pub mod lexical {
        /// Maximum characters of token text copied into a log event
        /// RESOURCE: Keeps log lines bounded for adversarial input
        pub const MAX_LOGGED_TOKEN_TEXT: usize = 64;

        /// Source bytes per pre-allocated token slot
        /// PERFORMANCE: Schema sources average a token every few bytes
        pub const BYTES_PER_TOKEN_ESTIMATE: usize = 4;

        /// Upper bound on token slots reserved up front
        /// RESOURCE: Large inputs grow the vector on demand instead
        pub const MAX_INITIAL_TOKEN_CAPACITY: usize = 65_536;

        /// Share of unknown tokens above which a scan is reported as suspicious
        pub const UNKNOWN_RATIO_WARNING_THRESHOLD: f64 = 0.5;
    }

    pub mod logging {
        /// Environment variable prefix for every runtime preference
        pub const ENV_PREFIX: &str = "PROTO_LEXER_";
    }
}
