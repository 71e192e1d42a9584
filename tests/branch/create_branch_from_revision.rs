use crate::common::command::{get_head_commit_sha, run_revwalk_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn branch_tip(
    repository_dir: &TempDir,
    branch: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(
        repository_dir
            .path()
            .join(".git")
            .join("refs")
            .join("heads")
            .join(branch),
    )?;

    Ok(content.trim().to_string())
}

fn rev_list(
    repository_dir: &TempDir,
    revision: &str,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = run_revwalk_command(repository_dir.path(), &["rev-list", revision])
        .assert()
        .success();

    Ok(String::from_utf8(output.get_output().stdout.clone())?
        .lines()
        .map(str::to_string)
        .collect())
}

#[rstest]
fn create_branch_from_head(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(repository_dir.path(), &["branch", "create", "feature"])
        .assert()
        .success();

    assert_eq!(
        branch_tip(&repository_dir, "feature")?,
        get_head_commit_sha(repository_dir.path())?
    );

    Ok(())
}

#[rstest]
#[case::parent("HEAD^", 1)]
#[case::ancestor("HEAD~2", 2)]
#[case::alias_ancestor("@~1", 1)]
#[case::branch_ancestor("master~0", 0)]
#[case::double_parent("master^^", 2)]
fn create_branch_from_revision(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
    #[case] revision: &str,
    #[case] generations: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let history = rev_list(&repository_dir, "HEAD")?;

    run_revwalk_command(
        repository_dir.path(),
        &["branch", "create", "feature", revision],
    )
    .assert()
    .success();

    assert_eq!(branch_tip(&repository_dir, "feature")?, history[generations]);
    assert_eq!(
        rev_list(&repository_dir, "feature")?,
        history[generations..].to_vec()
    );

    Ok(())
}

#[rstest]
#[case::full(40)]
#[case::abbreviated(7)]
fn create_branch_from_oid(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
    #[case] length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let history = rev_list(&repository_dir, "HEAD")?;

    run_revwalk_command(
        repository_dir.path(),
        &["branch", "create", "feature/old", &history[1][..length]],
    )
    .assert()
    .success();

    assert_eq!(branch_tip(&repository_dir, "feature/old")?, history[1]);

    Ok(())
}

#[rstest]
fn create_branch_past_the_root_fails(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(
        repository_dir.path(),
        &["branch", "create", "feature", "HEAD~3"],
    )
    .assert()
    .failure();

    assert!(
        !repository_dir
            .path()
            .join(".git/refs/heads/feature")
            .exists()
    );

    Ok(())
}
