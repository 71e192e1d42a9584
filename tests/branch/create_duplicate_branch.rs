use crate::common::command::run_revwalk_command;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let branch_name = "feature-branch";

    run_revwalk_command(repository_dir.path(), &["branch", "create", branch_name])
        .assert()
        .success();
    assert!(
        repository_dir
            .path()
            .join(".git/refs/heads")
            .join(branch_name)
            .exists()
    );

    run_revwalk_command(repository_dir.path(), &["branch", "create", branch_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}
