use deskfs::snapshot::Snapshot;
use deskfs::store::MemorySnapshotStore;
use deskfs::vfs::{FileSystem, TreeEntry};
use deskfs::VfsError;
use proptest::prelude::*;
use std::sync::Arc;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 1..5)
}

/// (directory segments, file name, content); directory and file names never collide
fn file_specs() -> impl Strategy<Value = Vec<(Vec<String>, String, String)>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-c]{1,2}", 0..3),
            "[d-f]{1,3}\\.txt",
            "[ -~]{0,24}",
        ),
        1..12,
    )
}

fn absolute(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Absolute paths of every directory and file under `entry`.
fn walk(entry: &TreeEntry, path: &str, dirs: &mut Vec<String>, files: &mut Vec<String>) {
    if entry.kind.is_directory() {
        dirs.push(path.to_string());
        for child in &entry.children {
            let child_path = if path == "/" {
                format!("/{}", child.name)
            } else {
                format!("{}/{}", path, child.name)
            };
            walk(child, &child_path, dirs, files);
        }
    } else {
        files.push(path.to_string());
    }
}

proptest! {
    #[test]
    fn cd_then_pwd_returns_created_path(segs in segments()) {
        let mut fs = FileSystem::new();
        let path = absolute(&segs);
        fs.mkdir(&path).unwrap();
        fs.cd(&path).unwrap();
        prop_assert_eq!(fs.pwd(), path);
    }

    #[test]
    fn empty_segments_are_ignored(segs in segments()) {
        let mut fs = FileSystem::new();
        let path = absolute(&segs);
        fs.mkdir(&path).unwrap();
        let noisy = format!("//{}/", segs.join("//"));
        prop_assert_eq!(fs.resolve(&noisy).unwrap(), fs.resolve(&path).unwrap());
        prop_assert_eq!(fs.ls(&noisy).unwrap(), fs.ls(&path).unwrap());
    }

    #[test]
    fn ls_dot_matches_absolute_listing(segs in segments(), depth in 0usize..4) {
        let mut fs = FileSystem::new();
        fs.mkdir(&absolute(&segs)).unwrap();
        let depth = depth.min(segs.len());
        let cwd = if depth == 0 { "/".to_string() } else { absolute(&segs[..depth]) };
        fs.cd(&cwd).unwrap();
        prop_assert_eq!(fs.ls(".").unwrap(), fs.ls(&cwd).unwrap());
    }

    #[test]
    fn rm_removes_all_descendants(segs in prop::collection::vec("[a-z]{1,6}", 2..6), cut in 1usize..5) {
        let mut fs = FileSystem::new();
        fs.mkdir(&absolute(&segs)).unwrap();
        let cut = cut.min(segs.len() - 1);
        fs.rm(&absolute(&segs[..cut])).unwrap();
        for depth in cut..=segs.len() {
            let gone = absolute(&segs[..depth]);
            prop_assert!(matches!(fs.ls(&gone), Err(VfsError::PathNotFound(_))));
        }
    }

    #[test]
    fn mv_carries_content(content in "[ -~]{0,40}") {
        let mut fs = FileSystem::new();
        fs.mkdir("/x").unwrap();
        fs.mkdir("/y").unwrap();
        fs.touch("/x/file.txt").unwrap();
        fs.update_file("/x/file.txt", content.clone()).unwrap();
        fs.mv("/x/file.txt", "/y/file.txt").unwrap();
        prop_assert_eq!(fs.cat("/y/file.txt").unwrap(), content);
        prop_assert!(matches!(fs.cat("/x/file.txt"), Err(VfsError::PathNotFound(_))));
    }

    #[test]
    fn snapshot_round_trip_preserves_listings_and_contents(specs in file_specs()) {
        let mut fs = FileSystem::new();
        for (dirs, file, content) in &specs {
            let dir = absolute(dirs);
            fs.mkdir(&dir).unwrap();
            let path = if dir == "/" { format!("/{}", file) } else { format!("{}/{}", dir, file) };
            fs.touch(&path).unwrap();
            fs.update_file(&path, content.clone()).unwrap();
        }

        let bytes = fs.snapshot().to_json_bytes().unwrap();
        let decoded = Snapshot::from_json_slice(&bytes).unwrap();
        let restored = FileSystem::from_snapshot(
            &decoded,
            Arc::new(MemorySnapshotStore::new()),
            "round-trip",
        )
        .unwrap();

        let (mut dirs, mut files) = (Vec::new(), Vec::new());
        walk(&fs.tree("/").unwrap(), "/", &mut dirs, &mut files);
        prop_assert_eq!(restored.node_count(), fs.node_count());
        for dir in &dirs {
            prop_assert_eq!(restored.ls(dir).unwrap(), fs.ls(dir).unwrap());
        }
        for file in &files {
            prop_assert_eq!(restored.cat(file).unwrap(), fs.cat(file).unwrap());
        }
    }
}
