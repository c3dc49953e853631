use deskfs::tree::FileType;
use deskfs::vfs::{EntryKind, FileSystem};
use deskfs::VfsError;

fn names(fs: &FileSystem, path: &str) -> Vec<String> {
    fs.ls(path).unwrap().into_iter().map(|e| e.name).collect()
}

#[test]
fn touch_then_cat_returns_last_written_content() {
    let mut fs = FileSystem::new();
    fs.mkdir("/notes").unwrap();
    assert_eq!(fs.touch("/notes/todo.txt").unwrap(), "File created: /notes/todo.txt");
    assert_eq!(fs.cat("/notes/todo.txt").unwrap(), "");

    fs.update_file("/notes/todo.txt", "first").unwrap();
    fs.update_file("/notes/todo.txt", "second draft").unwrap();
    assert_eq!(fs.cat("/notes/todo.txt").unwrap(), "second draft");
    assert_eq!(fs.get_file_info("/notes/todo.txt").unwrap().size, 12);
}

#[test]
fn touch_existing_file_is_reported_not_failed() {
    let mut fs = FileSystem::new();
    fs.touch("/a.txt").unwrap();
    fs.update_file("/a.txt", "keep").unwrap();
    assert_eq!(fs.touch("/a.txt").unwrap(), "File already exists: /a.txt");
    assert_eq!(fs.cat("/a.txt").unwrap(), "keep");
}

#[test]
fn touch_requires_existing_parent_directory() {
    let mut fs = FileSystem::new();
    assert!(matches!(
        fs.touch("/missing/file.txt"),
        Err(VfsError::PathNotFound(_))
    ));
    fs.touch("/plain").unwrap();
    assert!(matches!(
        fs.touch("/plain/child"),
        Err(VfsError::NotADirectory(_))
    ));
}

#[test]
fn mkdir_through_file_fails() {
    let mut fs = FileSystem::new();
    fs.touch("/f").unwrap();
    assert!(matches!(fs.mkdir("/f/sub"), Err(VfsError::NotADirectory(_))));
    assert_eq!(names(&fs, "/"), vec!["f"]);
}

#[test]
fn mkdir_is_idempotent_and_listed_as_directory() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a/b/c").unwrap();
    fs.mkdir("/a/b/c").unwrap();
    let entries = fs.ls("/a/b").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "c");
    assert_eq!(entries[0].kind, EntryKind::Directory);
}

#[test]
fn update_directory_fails() {
    let mut fs = FileSystem::new();
    fs.mkdir("/docs").unwrap();
    assert_eq!(
        fs.update_file("/docs", "x").unwrap_err(),
        VfsError::CannotModifyDirectory("/docs".into())
    );
}

#[test]
fn rm_directory_removes_every_descendant() {
    let mut fs = FileSystem::new();
    fs.mkdir("/proj/src/bin").unwrap();
    fs.touch("/proj/src/lib.rs").unwrap();
    fs.touch("/proj/src/bin/main.rs").unwrap();

    assert_eq!(fs.rm("/proj/src").unwrap(), "Removed: /proj/src");
    for gone in ["/proj/src", "/proj/src/bin", "/proj/src/lib.rs", "/proj/src/bin/main.rs"] {
        assert!(
            matches!(fs.get_file_info(gone), Err(VfsError::PathNotFound(_))),
            "{} should be gone",
            gone
        );
    }
    assert!(fs.ls("/proj").unwrap().is_empty());
    assert_eq!(fs.node_count(), 2);
}

#[test]
fn rm_missing_entry_and_root() {
    let mut fs = FileSystem::new();
    assert_eq!(
        fs.rm("/nope").unwrap_err(),
        VfsError::NoSuchEntry("/nope".into())
    );
    assert!(matches!(fs.rm("/"), Err(VfsError::InvalidTarget { .. })));
    assert!(matches!(fs.rm("/ghost/child"), Err(VfsError::PathNotFound(_))));
}

#[test]
fn rm_of_working_directory_falls_back_to_parent() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a/b/c").unwrap();
    fs.cd("/a/b/c").unwrap();
    fs.rm("/a/b").unwrap();
    assert_eq!(fs.pwd(), "/a");
}

#[test]
fn mv_moves_file_between_directories() {
    let mut fs = FileSystem::new();
    fs.mkdir("/x").unwrap();
    fs.mkdir("/y").unwrap();
    fs.touch("/x/file.txt").unwrap();
    fs.update_file("/x/file.txt", "payload").unwrap();

    assert_eq!(
        fs.mv("/x/file.txt", "/y/file.txt").unwrap(),
        "Moved /x/file.txt to /y/file.txt"
    );
    assert_eq!(fs.cat("/y/file.txt").unwrap(), "payload");
    assert_eq!(
        fs.cat("/x/file.txt").unwrap_err(),
        VfsError::PathNotFound("/x/file.txt".into())
    );
}

#[test]
fn mv_onto_existing_name_leaves_both_untouched() {
    let mut fs = FileSystem::new();
    fs.mkdir("/x").unwrap();
    fs.mkdir("/y").unwrap();
    fs.touch("/x/file.txt").unwrap();
    fs.update_file("/x/file.txt", "source").unwrap();
    fs.touch("/y/file.txt").unwrap();
    fs.update_file("/y/file.txt", "dest").unwrap();

    assert_eq!(
        fs.mv("/x/file.txt", "/y/file.txt").unwrap_err(),
        VfsError::DestinationExists("/y/file.txt".into())
    );
    assert_eq!(fs.cat("/x/file.txt").unwrap(), "source");
    assert_eq!(fs.cat("/y/file.txt").unwrap(), "dest");
}

#[test]
fn mv_renames_in_place_and_keeps_subtree() {
    let mut fs = FileSystem::new();
    fs.mkdir("/old/inner").unwrap();
    fs.touch_with_type("/old/inner/song.mp3", FileType::Audio).unwrap();
    fs.mv("/old", "/new").unwrap();
    assert_eq!(names(&fs, "/"), vec!["new"]);
    let info = fs.get_file_info("/new/inner/song.mp3").unwrap();
    assert_eq!(info.kind, EntryKind::File(FileType::Audio));
}

#[test]
fn mv_rejections() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a/b").unwrap();
    assert!(matches!(fs.mv("/a", "/a/b/a"), Err(VfsError::InvalidTarget { .. })));
    assert!(matches!(fs.mv("/a", "/nowhere/a"), Err(VfsError::PathNotFound(_))));
    assert_eq!(
        fs.mv("/zzz", "/a/zzz").unwrap_err(),
        VfsError::NoSuchEntry("/zzz".into())
    );
    assert_eq!(names(&fs, "/a"), vec!["b"]);
}

#[test]
fn relative_paths_follow_working_directory() {
    let mut fs = FileSystem::new();
    fs.mkdir("/home/user/docs").unwrap();
    fs.cd("/home/user").unwrap();
    fs.touch("docs/readme.md").unwrap();
    fs.update_file("./docs/../docs/readme.md", "hi").unwrap();
    assert_eq!(fs.cat("/home/user/docs/readme.md").unwrap(), "hi");
    assert_eq!(fs.ls(".").unwrap(), fs.ls("/home/user").unwrap());
    assert_eq!(fs.ls("").unwrap(), fs.ls("/home/user").unwrap());
}

#[test]
fn parent_of_root_is_root() {
    let mut fs = FileSystem::new();
    fs.cd("..").unwrap();
    assert_eq!(fs.pwd(), "/");
    fs.mkdir("/a").unwrap();
    assert_eq!(fs.absolute_path("/../../a").unwrap(), "/a");
}
