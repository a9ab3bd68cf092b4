//! Generates `environment_settings.rs`, the constants the backend is compiled against.
//!
//! The generator reads canister ids from `canister_ids.json` (or the local replica's
//! `.dfx/local/canister_ids.json`), picks the limits for the selected environment, and writes
//! them out as plain `pub const` items.

mod environment;
mod error;
mod ids;
mod render;

pub use environment::*;
pub use error::*;
pub use ids::*;
pub use render::render;

use std::{fs, path::Path};

/// The default name of the generated file.
pub const SETTINGS_FILE: &str = "environment_settings.rs";

/// Resolve the ids of the project at `root` for `env` and write the settings file to `out`.
pub fn generate(root: &Path, env: Environment, out: &Path) -> Result<()> {
    let ids = CanisterIds::resolve(root, env)?;
    let contents = render(&ids, &env.settings());

    fs::write(out, contents).map_err(|source| Error::Io {
        path: out.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %out.display(), %env, "wrote environment settings");
    Ok(())
}
