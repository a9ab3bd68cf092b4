use crate::{Environment, Error, Result, CANISTER_IDS_FILE};
use serde::Deserialize;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// A parsed `canister_ids.json`: controller name to environment name to canister id.
///
/// Entries are kept as raw JSON so a malformed controller only loses its own ids.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct CanisterIdsFile {
    entries: BTreeMap<String, Value>,
}

impl CanisterIdsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        contents.parse::<Self>().map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The id of `controller` in `env`, or an empty string if there is none.
    ///
    /// Controllers that were never deployed to an environment simply have no entry, so a
    /// missing id is not an error. Non-object controllers and non-string ids are treated the
    /// same way.
    pub fn id(&self, controller: &str, env: Environment) -> String {
        self.entries
            .get(controller)
            .and_then(|envs| envs.get(env.as_str()))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

impl std::str::FromStr for CanisterIdsFile {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Every canister id the generated settings file needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanisterIds {
    pub cycles_management_controller: String,
    pub group_controller: String,
    pub group_management_controller: String,
    pub management_controller: String,
    pub report_controller: String,
    pub storage_controller: String,
    pub storage_management_controller: String,
    pub user_controller: String,

    pub development_management_controller: String,
    pub staging_management_controller: String,
    pub production_management_controller: String,
}

impl CanisterIds {
    /// Look up the ids for `env` in `ids`, and the deployed management ids in `deployed`.
    pub fn from_files(ids: &CanisterIdsFile, deployed: &CanisterIdsFile, env: Environment) -> Self {
        let management = |env| deployed.id("management_controller", env);

        Self {
            cycles_management_controller: ids.id("cycles_management_controller", env),
            group_controller: ids.id("group_controller", env),
            group_management_controller: ids.id("group_management_controller", env),
            management_controller: ids.id("management_controller", env),
            report_controller: ids.id("report_controller", env),
            storage_controller: ids.id("storage_controller", env),
            storage_management_controller: ids.id("storage_management_controller", env),
            user_controller: ids.id("user_controller", env),

            development_management_controller: management(Environment::Development),
            staging_management_controller: management(Environment::Staging),
            production_management_controller: management(Environment::Production),
        }
    }

    /// Read the ids for `env` from the project at `root`.
    ///
    /// Both the environment's own ids file and `canister_ids.json` must exist, since the
    /// management ids of the deployed environments are always emitted.
    pub fn resolve(root: &Path, env: Environment) -> Result<Self> {
        let ids_path = env.ids_file(root);
        let deployed_path: PathBuf = root.join(CANISTER_IDS_FILE);

        tracing::debug!(path = %ids_path.display(), %env, "reading canister ids");
        let ids = CanisterIdsFile::load(&ids_path)?;
        let deployed = if ids_path == deployed_path {
            ids.clone()
        } else {
            CanisterIdsFile::load(&deployed_path)?
        };

        Ok(Self::from_files(&ids, &deployed, env))
    }
}
