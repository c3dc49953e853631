use deskfs::snapshot::Snapshot;
use deskfs::store::{SledSnapshotStore, SnapshotStore, SNAPSHOT_KEY};
use deskfs::tree::FileType;
use deskfs::vfs::{EntryKind, FileSystem};
use deskfs::Session;
use std::sync::Arc;
use tempfile::TempDir;

fn sled_store(dir: &TempDir) -> Arc<dyn SnapshotStore> {
    Arc::new(SledSnapshotStore::open(&dir.path().join("store")).unwrap())
}

#[test]
fn session_restores_tree_and_working_directory_from_sled() {
    let temp_dir = TempDir::new().unwrap();
    {
        let session = Session::open(sled_store(&temp_dir), SNAPSHOT_KEY);
        let shell = session.shell();
        shell.execute("mkdir /home/me/projects");
        shell.execute("touch /home/me/projects/plan.md");
        shell.execute("write /home/me/projects/plan.md ship it");
        shell.execute("cd /home/me");
    }

    let session = Session::open(sled_store(&temp_dir), SNAPSHOT_KEY);
    let fs = session.handle();
    let fs = fs.read();
    assert_eq!(fs.pwd(), "/home/me");
    assert_eq!(fs.cat("projects/plan.md").unwrap(), "ship it");
    let info = fs.get_file_info("/home/me/projects/plan.md").unwrap();
    assert_eq!(info.size, 7);
}

#[test]
fn removed_working_directory_restores_to_root() {
    let temp_dir = TempDir::new().unwrap();
    let store = sled_store(&temp_dir);
    let mut fs = FileSystem::open(Arc::clone(&store));
    fs.mkdir("/tmp/scratch").unwrap();
    fs.cd("/tmp/scratch").unwrap();

    let mut snapshot = fs.snapshot();
    snapshot.cwd = "/does/not/exist".to_string();
    store
        .save(SNAPSHOT_KEY, &snapshot.to_json_bytes().unwrap())
        .unwrap();
    drop(fs);

    let reopened = FileSystem::open(store);
    assert_eq!(reopened.pwd(), "/");
    assert!(reopened.exists("/tmp/scratch"));
}

#[test]
fn corrupt_snapshot_is_replaced_on_next_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let store = sled_store(&temp_dir);
    store.save(SNAPSHOT_KEY, b"\x00garbage").unwrap();

    let mut fs = FileSystem::open(Arc::clone(&store));
    assert_eq!(fs.node_count(), 1);
    fs.touch("/fresh.txt").unwrap();

    let bytes = store.load(SNAPSHOT_KEY).unwrap().unwrap();
    let snapshot = Snapshot::from_json_slice(&bytes).unwrap();
    assert!(snapshot.nodes[0].is_directory());
    let children: Vec<_> = snapshot.children_of(snapshot.nodes[0].id()).collect();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name(), "fresh.txt");
}

#[test]
fn deep_tree_survives_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let store = sled_store(&temp_dir);
    let deep: String = (0..80).map(|i| format!("/level{}", i)).collect();
    {
        let mut fs = FileSystem::open(Arc::clone(&store));
        fs.mkdir("/keep").unwrap();
        fs.touch("/keep/notes.txt").unwrap();
        fs.update_file("/keep/notes.txt", "still here").unwrap();
        fs.mkdir(&deep).unwrap();
        fs.touch(&format!("{}/bottom.txt", deep)).unwrap();
    }

    let fs = FileSystem::open(store);
    assert_eq!(fs.node_count(), 84);
    assert_eq!(fs.cat("/keep/notes.txt").unwrap(), "still here");
    assert!(fs.exists(&deep));
    assert!(fs.exists(&format!("{}/bottom.txt", deep)));
}

#[test]
fn file_types_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut fs = FileSystem::open(sled_store(&temp_dir));
        fs.touch_with_type("/clip.mp4", FileType::Video).unwrap();
        fs.touch_with_type("/custom.bin", FileType::Other("firmware".into()))
            .unwrap();
    }
    let fs = FileSystem::open(sled_store(&temp_dir));
    let kinds: Vec<_> = fs.ls("/").unwrap().into_iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::File(FileType::Video),
            EntryKind::File(FileType::Other("firmware".into())),
        ]
    );
}

#[test]
fn sessions_under_different_keys_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let store = sled_store(&temp_dir);
    let work = Session::open(Arc::clone(&store), "work");
    let home = Session::open(Arc::clone(&store), "home");
    work.handle().write().mkdir("/reports").unwrap();
    home.handle().write().mkdir("/photos").unwrap();
    drop((work, home));

    assert!(Session::open(Arc::clone(&store), "work").handle().read().exists("/reports"));
    assert!(!Session::open(store, "home").handle().read().exists("/reports"));
}
