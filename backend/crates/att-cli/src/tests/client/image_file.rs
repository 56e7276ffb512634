use crate::{ClientError, ImageFile};

use googletest::prelude::*;

#[gtest]
fn given_existing_file_when_loading_then_name_and_bytes_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("door.jpg");
    std::fs::write(&path, b"jpeg-bytes").unwrap();

    let image = ImageFile::load(&path).unwrap();

    expect_that!(image.filename.as_str(), eq("door.jpg"));
    expect_that!(image.data.as_slice(), eq(b"jpeg-bytes".as_slice()));
}

#[gtest]
fn given_missing_file_when_loading_then_image_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jpg");

    let err = ImageFile::load(&path).unwrap_err();

    match err {
        ClientError::Image { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected image error, got {:?}", other),
    }
}

#[gtest]
fn given_one_missing_file_when_loading_all_then_whole_batch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a.jpg");
    std::fs::write(&good, b"a").unwrap();
    let bad = dir.path().join("b.jpg");

    let result = ImageFile::load_all(&[good, bad]);

    assert!(result.is_err());
}
