use std::path::PathBuf;

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://127.0.0.1:8080",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server listens on
    pub port: u16,
    /// Root of the static content (`about-me/`, `projects/`, `shortcuts/`, fixtures)
    pub public_dir: PathBuf,
    /// Built WASM frontend, served at `/` when present
    pub frontend_dist: Option<PathBuf>,
    /// Browser origins allowed to call the API cross-origin
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env_parse("PORTFOLIO_PORT", 8080)?,
            public_dir: std::env::var("PORTFOLIO_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| workspace_root().join("public")),
            frontend_dist: std::env::var("FRONTEND_DIST").ok().map(PathBuf::from),
            cors_origins: env_csv("PORTFOLIO_CORS_ORIGINS", DEFAULT_CORS_ORIGINS),
        })
    }

    /// Defaults around an explicit public root; used by tests.
    pub fn for_public_dir(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: 0,
            public_dir: public_dir.into(),
            frontend_dist: None,
            cors_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

// The server may be launched from the repository root or from its own crate.
fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

fn env_csv(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        Err(_) => default.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_public_dir_has_no_frontend() {
        let config = Config::for_public_dir("/srv/public");
        assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
        assert!(config.frontend_dist.is_none());
        assert!(config
            .cors_origins
            .contains(&"http://localhost:3000".to_string()));
    }

    #[test]
    fn env_parse_reports_the_variable() {
        std::env::set_var("PORTFOLIO_TEST_BAD_PORT", "not-a-port");
        let err = env_parse::<u16>("PORTFOLIO_TEST_BAD_PORT", 1).unwrap_err();
        assert!(err.to_string().contains("PORTFOLIO_TEST_BAD_PORT=not-a-port"));
        std::env::remove_var("PORTFOLIO_TEST_BAD_PORT");
    }

    #[test]
    fn env_csv_trims_and_skips_blanks() {
        std::env::set_var("PORTFOLIO_TEST_ORIGINS", " http://a , ,http://b");
        assert_eq!(
            env_csv("PORTFOLIO_TEST_ORIGINS", &[]),
            vec!["http://a".to_string(), "http://b".to_string()]
        );
        std::env::remove_var("PORTFOLIO_TEST_ORIGINS");
        assert_eq!(env_csv("PORTFOLIO_TEST_ORIGINS", &["x"]), vec!["x".to_string()]);
    }
}
