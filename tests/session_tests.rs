use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

mod common;
use common::{read_records, record, setup_data_dir, student};

use tardylog::core::session::Session;
use tardylog::errors::{AppError, AppResult};
use tardylog::models::{Student, TardyRecord};
use tardylog::storage::cloud::CloudTables;
use tardylog::storage::local::LocalStore;

/// In-memory stand-in for the remote table store, with capture handles the
/// test keeps after handing the backend to the session.
#[derive(Default)]
struct MockCloud {
    students: Vec<Student>,
    records: Vec<TardyRecord>,
    fail_fetch: bool,
    fail_push: bool,
    upserts: Rc<RefCell<Vec<TardyRecord>>>,
    deletes: Rc<RefCell<Vec<String>>>,
}

impl CloudTables for MockCloud {
    fn fetch_students(&self) -> AppResult<Vec<Student>> {
        if self.fail_fetch {
            return Err(AppError::Cloud("backend unreachable".to_string()));
        }
        Ok(self.students.clone())
    }

    fn fetch_records(&self) -> AppResult<Vec<TardyRecord>> {
        if self.fail_fetch {
            return Err(AppError::Cloud("backend unreachable".to_string()));
        }
        Ok(self.records.clone())
    }

    fn upsert_record(&self, record: &TardyRecord) -> AppResult<()> {
        if self.fail_push {
            return Err(AppError::Cloud("backend unreachable".to_string()));
        }
        self.upserts.borrow_mut().push(record.clone());
        Ok(())
    }

    fn delete_record(&self, id: &str) -> AppResult<()> {
        if self.fail_push {
            return Err(AppError::Cloud("backend unreachable".to_string()));
        }
        self.deletes.borrow_mut().push(id.to_string());
        Ok(())
    }
}

#[test]
fn test_add_mirrors_to_cloud() {
    let dir = setup_data_dir("session_add_mirror");
    let mut session = Session::open_dir(Path::new(&dir));

    let upserts = Rc::new(RefCell::new(Vec::new()));
    session.set_cloud_backend(Box::new(MockCloud {
        upserts: Rc::clone(&upserts),
        ..Default::default()
    }));

    let added = session
        .add_record(&student("Alice", "S1", "7A"))
        .expect("add");

    let pushed = upserts.borrow();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].id, added.id);
    assert_eq!(read_records(&dir).len(), 1);
}

#[test]
fn test_failed_push_does_not_fail_the_operation() {
    let dir = setup_data_dir("session_push_fail");
    let mut session = Session::open_dir(Path::new(&dir));
    session.set_cloud_backend(Box::new(MockCloud {
        fail_push: true,
        ..Default::default()
    }));

    session
        .add_record(&student("Alice", "S1", "7A"))
        .expect("add must succeed despite the cloud");

    // locally persisted, failure captured in the audit log
    assert_eq!(read_records(&dir).len(), 1);
    let log = session.audit().read_all().expect("read log");
    assert!(log.iter().any(|l| l.contains("cloud_upsert_failed")));
}

#[test]
fn test_delete_forwards_the_same_id_to_the_cloud() {
    let dir = setup_data_dir("session_delete_forward");
    let mut session = Session::open_dir(Path::new(&dir));
    session
        .restore(vec![record("", "Alice", "S1", "7A", 1700000000000)], vec![])
        .expect("seed");

    let deletes = Rc::new(RefCell::new(Vec::new()));
    session.set_cloud_backend(Box::new(MockCloud {
        deletes: Rc::clone(&deletes),
        ..Default::default()
    }));

    let removed = session.delete_record("S1:1700000000000").expect("delete");
    assert!(removed);
    assert_eq!(deletes.borrow().as_slice(), ["S1:1700000000000"]);

    // a local miss still pushes the delete, keeping the mirror in step
    let removed = session.delete_record("S1:1700000000000").expect("delete");
    assert!(!removed);
    assert_eq!(deletes.borrow().len(), 2);
}

#[test]
fn test_pull_replaces_local_state() {
    let dir = setup_data_dir("session_pull");
    let mut session = Session::open_dir(Path::new(&dir));
    session
        .add_record(&student("Old", "S9", "9Z"))
        .expect("add");

    session.set_cloud_backend(Box::new(MockCloud {
        students: vec![student("Alice", "S1", "7A"), student("Budi", "S2", "7B")],
        records: vec![
            record("a-1", "Alice", "S1", "7A", 1700000000000),
            record("b-1", "Budi", "S2", "7B", 1690000000000),
            record("c-1", "Alice", "S1", "7A", 1680000000000),
        ],
        ..Default::default()
    }));

    assert!(session.pull_cloud().expect("pull"));

    // full refresh: the pre-existing record is gone
    assert_eq!(session.store().records().len(), 3);
    assert!(session.store().records().iter().all(|r| r.nis != "S9"));
    assert_eq!(session.store().roster().len(), 2);
    assert_eq!(read_records(&dir).len(), 3);
}

#[test]
fn test_failed_pull_leaves_state_untouched() {
    let dir = setup_data_dir("session_pull_fail");
    let mut session = Session::open_dir(Path::new(&dir));
    session
        .add_record(&student("Alice", "S1", "7A"))
        .expect("add");

    session.set_cloud_backend(Box::new(MockCloud {
        fail_fetch: true,
        ..Default::default()
    }));

    assert!(!session.pull_cloud().expect("pull reports, never errors"));
    assert_eq!(session.store().records().len(), 1);
    assert_eq!(read_records(&dir).len(), 1);

    let log = session.audit().read_all().expect("read log");
    assert!(log.iter().any(|l| l.contains("cloud_pull_failed")));
}

#[test]
fn test_open_dir_loads_prior_state() {
    let dir = setup_data_dir("session_load_prior");
    LocalStore::new(Path::new(&dir))
        .save_state(
            &[
                record("a-1", "Alice", "S1", "7A", 1700000000000),
                record("b-1", "Budi", "S2", "7B", 1690000000000),
            ],
            &[student("Alice", "S1", "7A")],
        )
        .expect("seed");

    let mut session = Session::open_dir(Path::new(&dir));
    assert_eq!(session.store().records().len(), 2);
    assert_eq!(session.store().roster().len(), 1);

    // a mutation after load saves the union, never the empty initial state
    session
        .add_record(&student("Citra", "S3", "7C"))
        .expect("add");
    assert_eq!(read_records(&dir).len(), 3);
}

#[test]
fn test_import_roster_persists_merge() {
    let dir = setup_data_dir("session_import");
    let mut session = Session::open_dir(Path::new(&dir));

    let count = session
        .import_roster(vec![student("Alice", "S1", "7A"), student("Budi", "S2", "7B")])
        .expect("import");
    assert_eq!(count, 2);

    let count = session
        .import_roster(vec![student("Alicia", "S1", "8A")])
        .expect("import");
    assert_eq!(count, 1);

    let roster = common::read_roster(&dir);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Alicia");
}
