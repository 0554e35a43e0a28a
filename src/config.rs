use clap::Parser;

/// Fibonacci over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "hello-fib", version, about)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HELLO_FIB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "HELLO_FIB_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Debug mode: log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, env = "HELLO_FIB_DEBUG")]
    pub debug: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "hello_fib=debug,tower_http=debug,info"
        } else {
            "info"
        }
    }
}
