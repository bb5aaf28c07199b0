//! Migration scaffolding.

use chrono::{DateTime, Utc};

use crate::error::{CliError, CliResult};

/// Template written for a fresh migration. The file is a module the host
/// binary registers under its timestamped identifier.
pub const MIGRATION_TEMPLATE: &str = r#"use strata_migrate::MigrationBuilder;

pub fn up(m: &mut MigrationBuilder<'_>) {
}

pub fn down(m: &mut MigrationBuilder<'_>) {
}
"#;

/// File name for a migration created at `now`: `<timestamp>_<name>.rs`.
pub fn migration_filename(name: &str, now: DateTime<Utc>) -> String {
    format!("{}_{name}.rs", now.format("%Y%m%d%H%M%S"))
}

/// A migration name must be a valid Rust module name, since the scaffold
/// is registered as a module of the host binary.
pub fn validate_name(name: &str) -> CliResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_lowercase() || first == '_')
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidName(format!(
            "'{name}' (expected lowercase letters, digits and underscores, \
             starting with a letter or underscore)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_filename_carries_the_timestamp_prefix() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 45).unwrap();
        assert_eq!(
            migration_filename("create_users", now),
            "20240102123045_create_users.rs"
        );
    }

    #[test]
    fn test_name_validation() {
        assert!(validate_name("create_users").is_ok());
        assert!(validate_name("_private2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("2cool").is_err());
        assert!(validate_name("CreateUsers").is_err());
        assert!(validate_name("create users").is_err());
    }
}
