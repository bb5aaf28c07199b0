//! `create` command - scaffold a new migration file.

use chrono::Utc;

use crate::cli::CreateArgs;
use crate::config::Config;
use crate::error::CliResult;
use crate::output;
use crate::scaffold;

pub async fn run(config: &Config, args: CreateArgs) -> CliResult<()> {
    scaffold::validate_name(&args.name)?;

    std::fs::create_dir_all(&config.migrations.directory)?;
    let path = config
        .migrations
        .directory
        .join(scaffold::migration_filename(&args.name, Utc::now()));
    std::fs::write(&path, scaffold::MIGRATION_TEMPLATE)?;

    output::success(&format!("Created migration {}", path.display()));
    output::dim("Register the new module in your migration registry.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::CliError;

    #[tokio::test]
    async fn test_create_writes_the_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.migrations.directory = dir.path().join("migrations");

        run(
            &config,
            CreateArgs {
                name: "create_users".to_string(),
            },
        )
        .await
        .unwrap();

        let entries: Vec<_> = std::fs::read_dir(&config.migrations.directory)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("_create_users.rs"));

        let body =
            std::fs::read_to_string(config.migrations.directory.join(&entries[0])).unwrap();
        assert_eq!(body, scaffold::MIGRATION_TEMPLATE);
    }

    #[tokio::test]
    async fn test_create_rejects_a_bad_name() {
        let config = Config::default();
        let err = run(
            &config,
            CreateArgs {
                name: "Create Users".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidName(_)));
    }
}
