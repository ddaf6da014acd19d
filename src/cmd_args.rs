use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Calculation service endpoint
    /// Optional. Overrides TAPELINE_ENDPOINT and the built-in default.
    #[clap(short = 'u', long, help = "calculation service endpoint URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds for the calculation service
    #[clap(short = 't', long, default_value = "10", help = "request timeout in seconds")]
    timeout: u64,

    /// Talk to the older multiply-only endpoint
    /// The legacy service accepts `num1` and `num2` only, so every
    /// operation other than multiplication is rejected locally.
    #[clap(long, help = "use the legacy multiply-only endpoint")]
    legacy_multiply: bool,

    /// Verbose mode
    /// Optional. Write debug logs to the session log file.
    #[clap(
        short = 'v',
        long,
        help = "write verbose logs to tapeline.log",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    endpoint: Option<String>,
    timeout: u64,
    legacy_multiply: bool,
    verbose: bool,
}

impl CommandLineArgs {
    #[allow(dead_code)]
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    #[allow(dead_code)]
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            endpoint: args.endpoint,
            timeout: args.timeout,
            legacy_multiply: args.legacy_multiply,
            verbose: args.verbose,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout
    }

    pub fn legacy_multiply(&self) -> bool {
        self.legacy_multiply
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.endpoint(), None);
        assert_eq!(args.timeout_secs(), 10);
        assert!(!args.legacy_multiply());
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_endpoint() {
        let args =
            CommandLineArgs::parse_from(["program", "--endpoint", "http://calc:8080/api/calculate"]);
        assert_eq!(args.endpoint(), Some("http://calc:8080/api/calculate"));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-u", "http://x/api", "-t", "3", "-v"]);
        assert_eq!(args.endpoint(), Some("http://x/api"));
        assert_eq!(args.timeout_secs(), 3);
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_legacy_multiply() {
        let args = CommandLineArgs::parse_from(["program", "--legacy-multiply"]);
        assert!(args.legacy_multiply());
    }
}
