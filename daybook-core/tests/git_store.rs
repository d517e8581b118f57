use daybook_core::history::args;
use daybook_core::{
    Config, DaybookConfig, DaybookError, EntryStore, GitCli, ListOptions, entry_title,
};
use std::{collections::BTreeSet, fs, path::PathBuf, thread, time::Duration};
use tempfile::tempdir;

/// Opens a store and gives its repository a local identity so commits succeed on
/// machines without a global git configuration.
fn open_store(base_dir: &std::path::Path) -> EntryStore<GitCli> {
    let store = EntryStore::open("personal", base_dir, None).unwrap();
    for setting in [
        ["config", "user.name", "Daybook Tests"],
        ["config", "user.email", "daybook@example.com"],
        ["config", "commit.gpgsign", "false"],
    ] {
        assert!(store.execute(&args(setting)).is_success());
    }
    store
}

fn create(store: &EntryStore<GitCli>, body: &str) -> PathBuf {
    thread::sleep(Duration::from_millis(2));
    let receipt = store.create(body, entry_title(body), false).unwrap();
    assert!(receipt.is_committed(), "{receipt}");
    receipt.path().unwrap().to_path_buf()
}

#[test]
fn open_initializes_repository_once() {
    let tmp = tempdir().unwrap();
    let base = tmp.path().join("journals");

    let store = open_store(&base);
    assert!(base.join(".git").is_dir());
    assert!(base.join("personal").is_dir());
    let first = create(&store, "kept");

    let reopened = EntryStore::open("personal", &base, None).unwrap();
    assert!(first.exists());
    let result = reopened.list(&ListOptions::default()).unwrap();
    assert_eq!(result.entries.len(), 1);
}

#[test]
fn create_list_edit_delete_through_git() {
    let tmp = tempdir().unwrap();
    let store = open_store(tmp.path());

    let a = create(&store, "Title A\n@@work content");
    let b = create(&store, "Title B\n@@home content");

    let latest = store
        .list(&ListOptions {
            max_entries: 1,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(latest.entries.len(), 1);
    assert_eq!(latest.entries[0].path, b);

    let work = store
        .list(&ListOptions {
            with_tags: Some("work"),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(work.entries.len(), 1);
    assert_eq!(work.entries[0].path, a);

    let tags = store.list_tags().unwrap().tags;
    let expected: BTreeSet<String> = ["work", "home"].iter().map(|s| s.to_string()).collect();
    assert_eq!(tags, expected);

    let receipt = store.edit(&a, "Title A", "Title A\nrewritten\n").unwrap();
    assert!(receipt.is_committed(), "{receipt}");
    let all = store.list(&ListOptions::default()).unwrap();
    assert_eq!(all.entries.len(), 2);
    let edited = all.entries.iter().find(|e| e.path == a).unwrap();
    assert_eq!(edited.body, "Title A\nrewritten\n");

    let log = store.execute(&args(["log", "--format=%s"]));
    assert_eq!(log.lines(), ["Title A", "Title B", "Title A"]);

    let deletion = store.delete(&[b.clone()]).unwrap();
    assert!(deletion.is_committed(), "{deletion}");
    assert!(!b.exists());
    let remaining = store.list(&ListOptions::default()).unwrap();
    let paths: Vec<PathBuf> = remaining.entries.into_iter().map(|e| e.path).collect();
    assert_eq!(paths, vec![a]);
}

#[test]
fn date_bounds_filter_by_commit_date() {
    let tmp = tempdir().unwrap();
    let store = open_store(tmp.path());
    let path = create(&store, "dated entry");

    let in_future = store
        .list(&ListOptions {
            after_date: Some("2099-01-01"),
            ..Default::default()
        })
        .unwrap();
    assert!(in_future.entries.is_empty());

    let long_ago = store
        .list(&ListOptions {
            before_date: Some("1 year ago"),
            ..Default::default()
        })
        .unwrap();
    assert!(long_ago.entries.is_empty());

    let recent = store
        .list(&ListOptions {
            after_date: Some("1 year ago"),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(recent.entries.len(), 1);
    assert_eq!(recent.entries[0].path, path);
}

#[test]
fn projects_sharing_a_repository_stay_apart() {
    let tmp = tempdir().unwrap();
    let personal = open_store(tmp.path());
    let work = EntryStore::open("work", tmp.path(), None).unwrap();

    create(&personal, "personal entry");
    create(&work, "work entry");

    let listed = personal.list(&ListOptions::default()).unwrap();
    let bodies: Vec<&str> = listed.entries.iter().map(|e| e.body.as_str()).collect();
    assert_eq!(bodies, vec!["personal entry"]);
}

#[test]
fn uncommitted_files_are_not_listed() {
    let tmp = tempdir().unwrap();
    let store = open_store(tmp.path());
    create(&store, "committed");

    let stray = store.project().project_dir.join("08_15_2025").join("1723705512.1.txt");
    fs::create_dir_all(stray.parent().unwrap()).unwrap();
    fs::write(&stray, "never committed").unwrap();

    let result = store.list(&ListOptions::default()).unwrap();
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].body, "committed");
}

#[test]
fn encrypted_entry_cannot_be_listed() {
    let tmp = tempdir().unwrap();
    let store = open_store(tmp.path());
    let receipt = store.create("ciphertext", None, true).unwrap();
    assert!(receipt.is_committed(), "{receipt}");

    let err = store.list(&ListOptions::default()).unwrap_err();
    assert!(matches!(err, DaybookError::Unsupported(_)));
}

#[test]
fn from_config_requires_an_installed_daybook() {
    let tmp = tempdir().unwrap();
    let mut config = Config::default();

    let err = EntryStore::from_config(&config, "personal").err().unwrap();
    assert!(matches!(err, DaybookError::UnknownDaybook(_)));

    config.install("personal", DaybookConfig::new(tmp.path(), None));
    let store = EntryStore::from_config(&config, "personal").unwrap();
    assert_eq!(store.project().project_dir, tmp.path().join("personal"));
}
