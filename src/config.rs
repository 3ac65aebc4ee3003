use crate::error::{BadEnvVarSnafu, ParseServerAddrSnafu, RecordsResult};
use dotenvy::var;
use snafu::ResultExt;
use std::{
    env::VarError,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

const DEFAULT_DB_PATH: &str = "students.db";
const DEFAULT_SERVER_IP: &str = "127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_addr: SocketAddr,
}

impl RuntimeConfiguration {
    pub fn new() -> RecordsResult<Self> {
        let server_ip = get_env_var_or("STUDENTS_SERVER_IP", DEFAULT_SERVER_IP)?;
        let server_addr = server_ip
            .parse()
            .context(ParseServerAddrSnafu { original: server_ip })?;

        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_addr,
        })
    }

    #[cfg(test)]
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_config: Arc::new(DbConfig { path: path.into() }),
            server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub const fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: PathBuf,
}

impl DbConfig {
    pub fn new() -> RecordsResult<Self> {
        Ok(Self {
            path: get_env_var_or("STUDENTS_DB_PATH", DEFAULT_DB_PATH)?.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads `name` from the environment (or `.env`), falling back to `default` only when it is unset.
fn get_env_var_or(name: &'static str, default: &str) -> RecordsResult<String> {
    match var(name) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_string()),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_points_at_given_db_file() {
        let config = RuntimeConfiguration::with_db_path("/tmp/some/students.db");
        assert_eq!(
            config.db_config().path(),
            Path::new("/tmp/some/students.db")
        );
        assert!(config.server_addr().ip().is_loopback());
    }
}
