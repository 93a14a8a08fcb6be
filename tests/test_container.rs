mod common;

use common::permissions;
use named_flags::{use_flags, Error, ErrorKind};

#[test]
fn test_add_and_remove() {
    let (flags, set) = permissions();
    let mut container = set.container();

    assert_eq!(Ok(false), container.has_flag(&flags["READ"]));

    container.add_flag(&flags["READ"]).unwrap();
    assert_eq!(Ok(true), container.has_flag(&flags["READ"]));

    container.remove_flag(&flags["READ"]).unwrap();
    assert_eq!(Ok(false), container.has_flag(&flags["READ"]));
}

#[test]
fn test_add_multiple() {
    let (_, set) = permissions();
    let mut container = set.container();

    container.add_flags(["READ", "WRITE"]).unwrap();
    assert_eq!(Ok(true), container.has_flag("READ"));
    assert_eq!(Ok(true), container.has_flag("WRITE"));
    assert_eq!(Ok(false), container.has_flag("DELETE"));
}

#[test]
fn test_invalid_flag() {
    let (_, set) = permissions();
    let mut container = set.container_with(["WRITE"]).unwrap();
    let before = container.bits();

    let unknown = Error::unknown_flag("INVALID");
    assert_eq!(Err(unknown.clone()), container.add_flag("INVALID"));
    assert_eq!(Err(unknown.clone()), container.has_flag("INVALID"));
    assert_eq!(Err(unknown.clone()), container.remove_flag("INVALID"));
    assert_eq!(
        Err(Error::unknown_flag("INVALID1")),
        container.add_flags(["INVALID1", "INVALID2"])
    );
    assert_eq!(before, container.bits());
}

#[test]
fn test_add_flags_validates_before_mutating() {
    let (_, set) = permissions();
    let mut container = set.container();

    let err = container.add_flags(["READ", "INVALID"]).unwrap_err();
    assert_eq!(ErrorKind::UnknownFlag, err.kind());
    assert_eq!(Ok(false), container.has_flag("READ"));
}

#[test]
fn test_idempotent() {
    let (_, set) = permissions();
    let mut once = set.container();
    let mut twice = set.container();

    once.add_flag("DELETE").unwrap();
    twice.add_flag("DELETE").unwrap();
    twice.add_flag("DELETE").unwrap();
    assert_eq!(once.bits(), twice.bits());

    once.remove_flag("READ").unwrap();
    assert_eq!(twice.bits(), once.bits());
}

#[test]
fn test_initial_flags() {
    let (_, set) = permissions();
    let seeded = set.container_with(["READ", "WRITE"]).unwrap();

    let mut added = set.container();
    added.add_flags(["READ", "WRITE"]).unwrap();

    assert_eq!(added.bits(), seeded.bits());
    assert_eq!(0b011, seeded.bits());
}

#[test]
fn test_invalid_initial_flags() {
    let (_, set) = permissions();
    let err = set.container_with(["READ", "EXECUTE"]).unwrap_err();
    assert_eq!(Error::unknown_flag("EXECUTE"), err);
}

#[test]
fn test_sets_do_not_share_names() {
    let (_, files) = permissions();
    let (_, features) = use_flags(["BETA", "DARK_MODE"]).unwrap();

    let mut container = features.container();
    assert!(!container.flags().same_set(files.flags()));
    assert_eq!(
        ErrorKind::UnknownFlag,
        container.add_flag("READ").unwrap_err().kind()
    );
    container.add_flag("BETA").unwrap();
    assert_eq!(0b01, container.bits());
}
