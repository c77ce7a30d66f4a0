#![allow(dead_code)]

use assert_fs::TempDir;
use chrono::{FixedOffset, TimeZone};
use rstest::fixture;
use std::cell::Cell;
use twig::areas::repository::{Clock, Repository};

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Deterministic clock ticking one hour per commit, starting from 2022-01-01
pub fn sequential_clock() -> Clock {
    sequential_clock_from(1_640_995_200)
}

/// Deterministic clock with a chosen epoch start
pub fn sequential_clock_from(start_seconds: i64) -> Clock {
    let ticks = Cell::new(0i64);

    Box::new(move || {
        let tick = ticks.get();
        ticks.set(tick + 1);

        FixedOffset::east_opt(0)
            .unwrap()
            .timestamp_opt(start_seconds + tick * 3600, 0)
            .unwrap()
    })
}

/// Open a repository over the temp workspace with a deterministic clock
pub fn open_repository(dir: &TempDir) -> Repository {
    Repository::new(dir.path().to_path_buf(), Box::new(std::io::sink()))
        .expect("Failed to create repository")
        .with_clock(sequential_clock())
}

/// Repository with an initial commit of `a.txt` and `b.txt` on master
#[fixture]
pub fn seeded_repository(workspace_dir: TempDir) -> (TempDir, Repository) {
    let mut repo = open_repository(&workspace_dir);

    repo.add("a.txt", "A").expect("stage a.txt");
    repo.add("b.txt", "B").expect("stage b.txt");
    repo.commit("init", "u").expect("initial commit");

    (workspace_dir, repo)
}
