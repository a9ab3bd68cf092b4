//! Rendering of the generated `environment_settings.rs`.

use crate::{CanisterIds, Settings};
use std::fmt::Display;

const HEADER: &str = "/*
This file is automatically generated based on the environment set

File can be generated with the following commands:
    LOCAL: \"ENV=local greeter-env\"
    DEVELOPMENT: \"ENV=development greeter-env\"
    STAGING: \"ENV=staging greeter-env\"
    PRODUCTION: \"ENV=production greeter-env\"

    Note: If the local canister ids are not known yet,
    the \"dfx canister create --all --no-wallet\" command should be ran
    to generate the local canister ids (.dfx/local/canister_ids.json)
*/
";

/// Render the settings file for one environment.
pub fn render(ids: &CanisterIds, settings: &Settings) -> String {
    let mut out = String::from(HEADER);

    section(&mut out, "These canisters are environment independent");
    id(&mut out, "CYCLES_MANAGEMENT_CANISTER_ID", &ids.cycles_management_controller);
    id(&mut out, "DEVELOPMENT_MANAGEMENT_CANISTER_ID", &ids.development_management_controller);
    id(&mut out, "STAGING_MANAGEMENT_CANISTER_ID", &ids.staging_management_controller);
    id(&mut out, "PRODUCTION_MANAGEMENT_CANISTER_ID", &ids.production_management_controller);

    section(&mut out, "These canisters are environment dependent");
    id(&mut out, "GROUP_MANAGEMENT_CANISTER_ID", &ids.group_management_controller);
    id(&mut out, "MANAGEMENT_CANISTER_ID", &ids.management_controller);
    id(&mut out, "REPORT_CANISTER_ID", &ids.report_controller);
    id(&mut out, "STORAGE_MANAGEMENT_CANISTER_ID", &ids.storage_management_controller);
    id(&mut out, "USER_CANISTER_ID", &ids.user_controller);

    section(&mut out, "These canisters are only used for the local deployment");
    id(&mut out, "GROUP_CANISTER_ID", &ids.group_controller);
    id(&mut out, "STORAGE_CANISTER_ID", &ids.storage_controller);

    section(&mut out, "Settings to be specified per environment");
    id(&mut out, "ENVIRONMENT", settings.environment.as_str());
    constant(&mut out, "MAX_GROUP_CANISTERS", "usize", settings.max_group_canisters);
    constant(&mut out, "MAX_GROUP_CANISTERS_ENABLED", "bool", settings.max_group_canisters_enabled);
    constant(&mut out, "MAX_STORAGE_CANISTERS", "usize", settings.max_storage_canisters);
    constant(&mut out, "MAX_STORAGE_CANISTERS_ENABLED", "bool", settings.max_storage_canisters_enabled);
    constant(&mut out, "MAX_REGISTERED_USERS", "usize", settings.max_registered_users);
    constant(&mut out, "MAX_REGISTERED_USERS_ENABLED", "bool", settings.max_registered_users_enabled);

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n// {title}\n"));
}

// Debug formatting quotes and escapes, so any id comes out as a valid literal.
fn id(out: &mut String, name: &str, value: &str) {
    constant(out, name, "&str", format_args!("{value:?}"));
}

fn constant(out: &mut String, name: &str, ty: &str, value: impl Display) {
    out.push_str(&format!("pub const {name}: {ty} = {value};\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Environment;
    use pretty_assertions::assert_eq;

    fn ids() -> CanisterIds {
        CanisterIds {
            user_controller: "rrkah-fqaaa-aaaaa-aaaaq-cai".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn emits_every_constant_once() {
        let out = render(&ids(), &Environment::Staging.settings());
        assert_eq!(out.matches("pub const ").count(), 18);
    }

    #[test]
    fn starts_with_the_regeneration_notice() {
        let out = render(&ids(), &Environment::Local.settings());
        assert!(out.starts_with("/*\nThis file is automatically generated"));
        assert!(out.contains("ENV=production greeter-env"));
    }

    #[test]
    fn quotes_ids_and_leaves_missing_ones_empty() {
        let out = render(&ids(), &Environment::Local.settings());
        assert!(out.contains("pub const USER_CANISTER_ID: &str = \"rrkah-fqaaa-aaaaa-aaaaq-cai\";\n"));
        assert!(out.contains("pub const GROUP_CANISTER_ID: &str = \"\";\n"));
    }

    #[test]
    fn renders_the_settings_section() {
        let out = render(&ids(), &Environment::Development.settings());
        let settings = out
            .split("// Settings to be specified per environment\n")
            .nth(1)
            .unwrap();

        assert_eq!(
            settings,
            "pub const ENVIRONMENT: &str = \"development\";
pub const MAX_GROUP_CANISTERS: usize = 10;
pub const MAX_GROUP_CANISTERS_ENABLED: bool = true;
pub const MAX_STORAGE_CANISTERS: usize = 1;
pub const MAX_STORAGE_CANISTERS_ENABLED: bool = true;
pub const MAX_REGISTERED_USERS: usize = 500;
pub const MAX_REGISTERED_USERS_ENABLED: bool = true;
"
        );
    }

    #[test]
    fn sections_come_in_order() {
        let out = render(&ids(), &Environment::Production.settings());
        let independent = out.find("environment independent").unwrap();
        let dependent = out.find("environment dependent").unwrap();
        let local = out.find("local deployment").unwrap();
        let settings = out.find("Settings to be specified").unwrap();
        assert!(independent < dependent && dependent < local && local < settings);
    }
}
