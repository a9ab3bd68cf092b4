use crate::Error;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

/// The variable that selects the deployment environment.
pub const ENV_VAR: &str = "ENV";

/// Ids of the deployed environments, kept in the project root.
pub const CANISTER_IDS_FILE: &str = "canister_ids.json";

/// Ids of the local replica, written by `dfx canister create`.
pub const LOCAL_CANISTER_IDS_FILE: &str = ".dfx/local/canister_ids.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Local,
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Local,
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Parse an environment name, falling back to [`Environment::Local`] for anything unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}, falling back to local");
            Environment::Local
        })
    }

    /// Map the value of `ENV`, if any, to an environment. Unset means local.
    pub fn from_var(value: Option<&str>) -> Self {
        value.map_or(Environment::Local, Self::from_name)
    }

    /// Read the environment from `ENV`.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// The ids file this environment reads its canisters from.
    pub fn ids_file(self, root: &Path) -> PathBuf {
        match self {
            Environment::Local => root.join(LOCAL_CANISTER_IDS_FILE),
            _ => root.join(CANISTER_IDS_FILE),
        }
    }

    pub fn settings(self) -> Settings {
        match self {
            Environment::Local => Settings {
                environment: self,
                max_registered_users: 0,
                max_registered_users_enabled: false,
                max_group_canisters: 0,
                max_group_canisters_enabled: false,
                max_storage_canisters: 0,
                max_storage_canisters_enabled: false,
            },
            Environment::Development => Settings {
                environment: self,
                max_registered_users: 500,
                max_registered_users_enabled: true,
                max_group_canisters: 10,
                max_group_canisters_enabled: true,
                max_storage_canisters: 1,
                max_storage_canisters_enabled: true,
            },
            Environment::Staging => Settings {
                environment: self,
                max_registered_users: 0,
                max_registered_users_enabled: true,
                max_group_canisters: 3,
                max_group_canisters_enabled: true,
                max_storage_canisters: 1,
                max_storage_canisters_enabled: true,
            },
            Environment::Production => Settings {
                environment: self,
                max_registered_users: 0,
                max_registered_users_enabled: true,
                max_group_canisters: 0,
                max_group_canisters_enabled: false,
                max_storage_canisters: 0,
                max_storage_canisters_enabled: false,
            },
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| Error::UnknownEnvironment(s.to_string()))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits that differ per environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub max_registered_users: usize,
    pub max_registered_users_enabled: bool,
    pub max_group_canisters: usize,
    pub max_group_canisters_enabled: bool,
    pub max_storage_canisters: usize,
    pub max_storage_canisters_enabled: bool,
}
