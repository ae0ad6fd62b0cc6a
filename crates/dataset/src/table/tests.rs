use super::*;

#[test]
fn writes_are_invisible_until_commit() {
	let dir = tempfile::tempdir().unwrap();
	let mut table = Table::new(Db::Leveldb);
	table.open(&dir.path().join("db"), Mode::New).unwrap();

	table.put(b"k".to_vec(), b"v".to_vec()).unwrap();
	assert_eq!(table.get(b"k").unwrap(), None);

	table.commit().unwrap();
	assert_eq!(table.get(b"k").unwrap(), Some(&b"v"[..]));
}

#[test]
fn committed_records_survive_reopen() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("db");

	let mut table = Table::new(Db::Lmdb);
	table.open(&path, Mode::New).unwrap();
	table.put(b"b".to_vec(), b"2".to_vec()).unwrap();
	table.put(b"a".to_vec(), b"1".to_vec()).unwrap();
	table.commit().unwrap();
	table.put(b"c".to_vec(), b"3".to_vec()).unwrap();
	table.close();

	let mut reopened = Table::new(Db::Lmdb);
	reopened.open(&path, Mode::Read).unwrap();
	assert_eq!(reopened.keys().unwrap(), vec![&b"a"[..], &b"b"[..]]);
	assert_eq!(reopened.first().unwrap(), Some((&b"a"[..], &b"1"[..])));
	assert_eq!(reopened.last().unwrap(), Some((&b"b"[..], &b"2"[..])));
}

#[test]
fn read_mode_requires_existing_database() {
	let dir = tempfile::tempdir().unwrap();
	let mut table = Table::new(Db::Leveldb);
	let err = table.open(&dir.path().join("missing"), Mode::Read).unwrap_err();
	assert!(matches!(err, DatasetError::Io { .. }));
	assert!(!table.is_open());
}

#[test]
fn new_mode_rejects_existing_database() {
	let dir = tempfile::tempdir().unwrap();
	let mut table = Table::new(Db::Leveldb);
	let err = table.open(dir.path(), Mode::New).unwrap_err();
	assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn read_mode_rejects_writes() {
	let dir = tempfile::tempdir().unwrap();
	let mut table = Table::new(Db::Leveldb);
	table.open(dir.path(), Mode::Read).unwrap();
	assert!(matches!(table.put(b"k".to_vec(), b"v".to_vec()), Err(DatasetError::ReadOnly(Db::Leveldb))));
	assert!(matches!(table.commit(), Err(DatasetError::ReadOnly(Db::Leveldb))));
}

#[test]
fn operations_on_closed_table_fail() {
	let mut table = Table::new(Db::Leveldb);
	assert!(matches!(table.get(b"k"), Err(DatasetError::NotOpen(Db::Leveldb))));
	assert!(matches!(table.commit(), Err(DatasetError::NotOpen(Db::Leveldb))));
}

#[test]
fn double_open_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let mut table = Table::new(Db::Leveldb);
	table.open(dir.path(), Mode::ReadWrite).unwrap();
	assert!(matches!(table.open(dir.path(), Mode::ReadWrite), Err(DatasetError::AlreadyOpen(Db::Leveldb))));
}

#[test]
fn failed_commit_applies_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("db");
	let mut table = Table::new(Db::Leveldb);
	table.open(&path, Mode::New).unwrap();
	std::fs::create_dir(path.join(RECORDS_FILE)).unwrap();

	table.put(b"k".to_vec(), b"v".to_vec()).unwrap();
	let err = table.commit().unwrap_err();
	assert!(matches!(err, DatasetError::Io { .. }), "{err}");
	assert_eq!(table.get(b"k").unwrap(), None);
	assert!(!path.join(STAGED_RECORDS_FILE).exists());

	std::fs::remove_dir(path.join(RECORDS_FILE)).unwrap();
	table.commit().unwrap();
	assert_eq!(table.get(b"k").unwrap(), Some(&b"v"[..]));
}
