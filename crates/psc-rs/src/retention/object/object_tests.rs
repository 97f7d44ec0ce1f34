use super::*;
use rand::RngCore;
use tempfile::TempDir;

fn write_object(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("write object image");
    path
}

#[test]
fn open_reports_image_length() {
    let dir = TempDir::new().expect("tmp dir");
    let path = write_object(&dir, "object-0.dat", b"AAAAADDDDDGGGGG");

    let object = ObjectFile::open(&path).expect("open");
    assert_eq!(object.len(), 15);
    assert_eq!(object.path(), path);
}

#[test]
fn read_returns_exact_range() {
    let dir = TempDir::new().expect("tmp dir");
    let path = write_object(&dir, "object-1.dat", b"BBBBBEEEEEHHHH");

    let object = ObjectFile::open(&path).expect("open");
    assert_eq!(object.read(0, 5).expect("row 0"), b"BBBBB");
    assert_eq!(object.read(10, 14).expect("trailing row"), b"HHHH");
}

#[test]
fn read_past_end_is_an_error() {
    let dir = TempDir::new().expect("tmp dir");
    let path = write_object(&dir, "object-0.dat", b"AAAAA");

    let object = ObjectFile::open(&path).expect("open");
    assert!(object.read(0, 6).is_err());
    assert!(object.read(3, 2).is_err());
}

#[test]
fn empty_image_serves_only_the_empty_range() {
    let dir = TempDir::new().expect("tmp dir");
    let path = write_object(&dir, "object-0.dat", b"");

    let object = ObjectFile::open(&path).expect("open");
    assert!(object.is_empty());
    assert!(object.read(0, 0).expect("empty range").is_empty());
    assert!(object.read(0, 1).is_err());
}

#[test]
fn mmap_roundtrips_random_payload() {
    let dir = TempDir::new().expect("tmp dir");
    let mut data = vec![0u8; 8192];
    rand::rng().fill_bytes(&mut data);
    let path = write_object(&dir, "object-2.dat", &data);

    let object = ObjectFile::open(&path).expect("open");
    assert_eq!(object.read(0, data.len() as u64).expect("full read"), data);
    assert_eq!(object.read(1000, 1234).expect("mid read"), data[1000..1234]);
}

#[test]
fn open_missing_image_is_an_error() {
    let dir = TempDir::new().expect("tmp dir");
    assert!(ObjectFile::open(dir.path().join("missing.dat")).is_err());
}
