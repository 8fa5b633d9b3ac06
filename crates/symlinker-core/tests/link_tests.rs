#![cfg(unix)]

use std::fs;
use std::os::unix::fs::symlink;
use std::path::PathBuf;
use tempfile::tempdir;

use symlinker_core::links::{create_link, delete_link, entry_exists};
use symlinker_core::{AppConfig, Error, LinkManager, LinkRequest};

fn manager_with_desktop(home: &std::path::Path) -> LinkManager {
    fs::create_dir_all(home.join("Desktop")).unwrap();
    LinkManager::new(AppConfig::for_home(home))
}

#[test]
fn test_create_stores_target_verbatim() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    let target = home.join("docs/notes.txt");
    fs::create_dir_all(home.join("docs")).unwrap();
    fs::write(&target, "hello").unwrap();

    let request = manager.create("notes.txt", target.clone()).unwrap();

    assert_eq!(request.link_path, home.join("Desktop/notes.txt"));
    assert_eq!(fs::read_link(&request.link_path).unwrap(), target);
    assert_eq!(fs::read_to_string(&request.link_path).unwrap(), "hello");
}

#[test]
fn test_create_never_overwrites_existing_file() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    let existing = home.join("Desktop/notes.txt");
    fs::write(&existing, "keep me").unwrap();

    let err = manager
        .create("notes.txt", home.join("elsewhere/notes.txt"))
        .unwrap_err();

    assert!(matches!(err, Error::Collision { ref path } if *path == existing));
    assert!(!fs::symlink_metadata(&existing).unwrap().file_type().is_symlink());
    assert_eq!(fs::read(&existing).unwrap(), b"keep me");
}

#[test]
fn test_create_collides_with_directory_and_dangling_link() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    fs::create_dir_all(home.join("Desktop/projects")).unwrap();
    symlink("/does/not/exist", home.join("Desktop/stale")).unwrap();

    assert!(matches!(
        manager.create("projects", home.join("x")),
        Err(Error::Collision { .. })
    ));
    assert!(matches!(
        manager.create("stale", home.join("x")),
        Err(Error::Collision { .. })
    ));
    assert_eq!(
        fs::read_link(home.join("Desktop/stale")).unwrap(),
        PathBuf::from("/does/not/exist")
    );
}

#[test]
fn test_create_without_destination_dir_reports_os_error() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let request = LinkRequest::new("notes.txt", home.join("notes.txt"), &home.join("Desktop"));

    let err = create_link(&request).unwrap_err();
    match err {
        Error::LinkCreation { path, source } => {
            assert_eq!(path, home.join("Desktop/notes.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!entry_exists(&home.join("Desktop")).unwrap());
}

#[test]
fn test_delete_refuses_regular_file() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    let file = home.join("Desktop/report.pdf");
    fs::write(&file, "pdf bytes").unwrap();

    let err = manager.delete("report.pdf").unwrap_err();

    assert!(matches!(err, Error::NotASymlink { .. }));
    assert_eq!(fs::read(&file).unwrap(), b"pdf bytes");
}

#[test]
fn test_delete_refuses_directory() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    fs::create_dir_all(home.join("Desktop/projects")).unwrap();

    assert!(matches!(
        manager.delete("projects"),
        Err(Error::NotASymlink { .. })
    ));
    assert!(home.join("Desktop/projects").is_dir());
}

#[test]
fn test_delete_removes_only_the_link() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    let target = home.join("notes.txt");
    fs::write(&target, "content").unwrap();
    let file = home.join("Desktop/plain.txt");
    fs::write(&file, "plain").unwrap();
    symlink(&target, home.join("Desktop/notes.txt")).unwrap();

    let removed = manager.delete("notes.txt").unwrap();

    assert_eq!(removed, home.join("Desktop/notes.txt"));
    assert!(!entry_exists(&removed).unwrap());
    assert_eq!(fs::read_to_string(&target).unwrap(), "content");
    assert_eq!(fs::read_to_string(&file).unwrap(), "plain");
}

#[test]
fn test_delete_dangling_link() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let link = home.join("stale");
    symlink("/does/not/exist", &link).unwrap();

    delete_link(&link).unwrap();
    assert!(!entry_exists(&link).unwrap());
}

#[test]
fn test_delete_missing_is_not_found() {
    let tmp = tempdir().unwrap();
    let manager = manager_with_desktop(tmp.path());

    assert!(matches!(
        manager.delete("ghost"),
        Err(Error::NotFound { ref path }) if *path == tmp.path().join("Desktop/ghost")
    ));
}

#[test]
fn test_names_outside_destination_are_rejected() {
    let tmp = tempdir().unwrap();
    let home = tmp.path();
    let manager = manager_with_desktop(home);
    symlink("/tmp", home.join("outside")).unwrap();

    assert!(matches!(
        manager.delete("../outside"),
        Err(Error::InvalidName { .. })
    ));
    assert!(entry_exists(&home.join("outside")).unwrap());
    assert!(matches!(manager.delete(""), Err(Error::EmptyInput)));
}
