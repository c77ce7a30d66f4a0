use assert_fs::TempDir;
use assert_fs::prelude::PathChild;
use pretty_assertions::assert_eq;
use rstest::rstest;
use twig::areas::repository::Repository;
use twig::artifacts::error::RepositoryError;

mod common;

use common::{open_repository, seeded_repository, workspace_dir};

#[rstest]
fn create_branch_before_any_commit_fails(workspace_dir: TempDir) {
    let mut repo = open_repository(&workspace_dir);

    let err = repo.create_branch("feature").unwrap_err();
    assert_eq!(
        err.downcast::<RepositoryError>().unwrap(),
        RepositoryError::EmptyHead
    );
}

#[rstest]
fn create_duplicate_branch_fails(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    repo.create_branch("feature").unwrap();

    let err = repo.create_branch("feature").unwrap_err();
    assert_eq!(
        err.downcast::<RepositoryError>().unwrap(),
        RepositoryError::BranchAlreadyExists {
            name: "feature".to_string()
        }
    );
}

#[rstest]
fn recreating_the_default_branch_fails(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    let err = repo.create_branch("master").unwrap_err();
    assert_eq!(
        err.downcast::<RepositoryError>().unwrap(),
        RepositoryError::BranchAlreadyExists {
            name: "master".to_string()
        }
    );
}

#[rstest]
fn created_branch_points_at_the_current_tip(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    let tip = repo
        .refs()
        .current_branch()
        .and_then(|b| b.last_commit())
        .expect("master tip")
        .clone();

    repo.create_branch("feature").unwrap();

    let feature = twig::artifacts::branch::branch_name::BranchName::try_parse(
        "feature".to_string(),
    )
    .unwrap();
    assert_eq!(
        repo.refs().branch(&feature).and_then(|b| b.last_commit()),
        Some(&tip)
    );
    // HEAD stays on master until an explicit checkout
    assert_eq!(repo.current_branch_name(), "master");
}

#[rstest]
fn checkout_of_unknown_branch_fails(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    let err = repo.checkout("ghost").unwrap_err();
    assert_eq!(
        err.downcast::<RepositoryError>().unwrap(),
        RepositoryError::BranchNotFound {
            name: "ghost".to_string()
        }
    );
    assert_eq!(repo.current_branch_name(), "master");
}

#[rstest]
fn invalid_branch_names_are_rejected(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    assert!(repo.create_branch("bad name").is_err());
    assert!(repo.create_branch("").is_err());
    assert!(repo.create_branch("-dash").is_err());
}

#[rstest]
fn checkout_restores_the_branch_tip_to_the_working_tree(
    seeded_repository: (TempDir, Repository),
) {
    let (dir, mut repo) = seeded_repository;

    repo.create_branch("feature").unwrap();
    repo.checkout("feature").unwrap();
    repo.add("a.txt", "feature version").unwrap();
    repo.commit("feature edit", "u").unwrap();

    // Switching back restores master's snapshot of a.txt
    repo.checkout("master").unwrap();
    assert_eq!(std::fs::read_to_string(dir.child("a.txt").path()).unwrap(), "A");
    assert_eq!(std::fs::read_to_string(dir.child("b.txt").path()).unwrap(), "B");

    // And forward again restores the feature edit
    repo.checkout("feature").unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.child("a.txt").path()).unwrap(),
        "feature version"
    );
}

#[rstest]
fn branches_are_listed_in_name_order(seeded_repository: (TempDir, Repository)) {
    let (_dir, mut repo) = seeded_repository;

    repo.create_branch("zeta").unwrap();
    repo.create_branch("alpha").unwrap();

    let names: Vec<&str> = repo
        .refs()
        .all_branches()
        .map(|b| b.name().as_ref())
        .collect();
    assert_eq!(names, vec!["alpha", "master", "zeta"]);
}
