use crate::common::command::{get_head_commit_sha, run_revwalk_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

fn rev_list(
    dir: &std::path::Path,
    args: &[&str],
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut command_args = vec!["rev-list"];
    command_args.extend_from_slice(args);

    let output = run_revwalk_command(dir, &command_args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    Ok(stdout.lines().map(str::to_string).collect())
}

#[rstest]
fn rev_list_prints_full_ids(
    #[from(crate::common::command::branched_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    let all = rev_list(dir, &["topic", "master"])?;
    assert_eq!(all.len(), 7);
    assert!(
        all.iter()
            .all(|oid| oid.len() == 40 && oid.chars().all(|c| c.is_ascii_hexdigit()))
    );

    let topic_only = rev_list(dir, &["master..topic"])?;
    assert_eq!(topic_only, all[..4].to_vec());
    assert_eq!(
        rev_list(dir, &[])?,
        vec![get_head_commit_sha(dir)?, all[5].clone(), all[6].clone()]
    );

    Ok(())
}

#[rstest]
fn rev_list_rejects_unknown_revision(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(repository_dir.path(), &["rev-list", "topic"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bad revision 'topic'"));

    Ok(())
}
