use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,
}

impl Config {
    /// Returns the `"host:port"` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // PORT/HOST from the environment take precedence over defaults
        if std::env::var("PORT").is_ok() || std::env::var("HOST").is_ok() {
            return;
        }
        let config = Config::try_parse_from(["luhn"]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config =
            Config::try_parse_from(["luhn", "--host", "127.0.0.1", "--port", "9000"]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Config::try_parse_from(["luhn", "--port", "not-a-port"]).is_err());
    }
}
