use csp_template::{
    BuildMode, TemplatePair, DEVELOPMENT_TEMPLATE, PRODUCTION_TEMPLATE, WORKING_ENTRY,
};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const DEV_HTML: &str = "<!doctype html><html><head><title>dev</title></head></html>";
const PROD_HTML: &str = "<!doctype html><html><head><title>prod</title></head></html>";

fn scratch_pair() -> (PathBuf, TemplatePair) {
    let dir = std::env::temp_dir().join(format!("swap-lifecycle-{}", Uuid::new_v4().simple()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(PRODUCTION_TEMPLATE), PROD_HTML).unwrap();
    fs::write(dir.join(DEVELOPMENT_TEMPLATE), DEV_HTML).unwrap();
    fs::write(dir.join(WORKING_ENTRY), DEV_HTML).unwrap();
    let pair = TemplatePair::in_dir(&dir);
    (dir, pair)
}

fn working(dir: &PathBuf) -> String {
    fs::read_to_string(dir.join(WORKING_ENTRY)).unwrap()
}

#[test]
fn round_trip_restores_the_entry_byte_for_byte() {
    let (dir, pair) = scratch_pair();
    let before = working(&dir);

    pair.on_build_start(BuildMode::Production).unwrap();
    pair.on_build_end(BuildMode::Production).unwrap();

    assert_eq!(working(&dir), before);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn two_sequential_production_builds_end_in_development_state() {
    let (dir, pair) = scratch_pair();

    for _ in 0..2 {
        pair.on_build_start(BuildMode::Production).unwrap();
        assert_eq!(working(&dir), PROD_HTML);
        pair.on_build_end(BuildMode::Production).unwrap();
    }

    assert_eq!(working(&dir), DEV_HTML);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn production_build_after_an_aborted_one_still_installs_the_template() {
    let (dir, pair) = scratch_pair();

    // first build aborts between hooks, entry stays in production state
    pair.on_build_start(BuildMode::Production).unwrap();
    assert_eq!(working(&dir), PROD_HTML);

    // next build must not assume a development starting state
    pair.on_build_start(BuildMode::Production).unwrap();
    pair.on_build_end(BuildMode::Production).unwrap();

    assert_eq!(working(&dir), DEV_HTML);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn development_builds_are_no_ops_on_the_entry() {
    let (dir, pair) = scratch_pair();
    let marker = "<!doctype html><html><head><title>hand edited</title></head></html>";
    fs::write(dir.join(WORKING_ENTRY), marker).unwrap();

    pair.on_build_start(BuildMode::Development).unwrap();
    assert_eq!(working(&dir), marker);
    pair.on_build_end(BuildMode::Development).unwrap();
    assert_eq!(working(&dir), marker);

    let _ = fs::remove_dir_all(&dir);
}
