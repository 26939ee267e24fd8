use tagged_path::{AbsDir, AbsFile, RelDir, RelFile};
use tests::{abs_dir, abs_file, rel_dir, rel_file};

#[test]
fn canonicalization() {
    assert_eq!(abs_dir("///foo//bar//mu/").as_str(), "/foo/bar/mu/");
    assert_eq!(abs_dir("/foo/bar/mu").as_str(), "/foo/bar/mu/");
    assert_eq!(abs_file("//foo//bar//mu.txt").as_str(), "/foo/bar/mu.txt");
    assert_eq!(rel_dir("foo//bar").as_str(), "foo/bar/");
    assert_eq!(rel_file("./foo/./mu.txt").as_str(), "foo/mu.txt");
}

#[test]
fn empty_input_is_the_current_directory_only() {
    assert_eq!(rel_dir("").as_str(), "");
    assert!(RelDir::parse("").unwrap().is_current());

    assert!(AbsDir::parse("").is_err());
    assert!(AbsFile::parse("").is_err());
    assert!(RelFile::parse("").is_err());
}

#[test]
fn parent_references_always_rejected() {
    for input in ["..", "/..", "/foo/../bar/", "foo/..", "../foo", "a/../b"] {
        assert!(AbsDir::parse(input).is_err(), "AbsDir accepted {input:?}");
        assert!(AbsFile::parse(input).is_err(), "AbsFile accepted {input:?}");
        assert!(RelDir::parse(input).is_err(), "RelDir accepted {input:?}");
        assert!(RelFile::parse(input).is_err(), "RelFile accepted {input:?}");
    }
}

#[test]
fn lone_current_dir_rejected_everywhere() {
    for input in [".", "./"] {
        assert!(AbsDir::parse(input).is_err(), "AbsDir accepted {input:?}");
        assert!(AbsFile::parse(input).is_err(), "AbsFile accepted {input:?}");
        assert!(RelDir::parse(input).is_err(), "RelDir accepted {input:?}");
        assert!(RelFile::parse(input).is_err(), "RelFile accepted {input:?}");
    }
}

#[test]
fn anchoring_mismatch_rejected() {
    assert!(RelDir::parse("/foo/").is_err());
    assert!(RelFile::parse("/foo").is_err());
    assert!(AbsDir::parse("foo/").is_err());
    assert!(AbsFile::parse("foo").is_err());
}

#[test]
fn separator_only_input_is_entry_point_specific() {
    assert_eq!(abs_dir("/").as_str(), "/");
    assert_eq!(abs_dir("////").as_str(), "/");
    assert!(AbsFile::parse("/").is_err());
    assert!(AbsFile::parse("////").is_err());
}

#[test]
fn home_marker_is_literal() {
    assert_eq!(rel_dir("~/").as_str(), "~/");
    assert_eq!(rel_dir("~/foo").as_str(), "~/foo/");
    assert_eq!(rel_file("~/foo").as_str(), "~/foo");
    // Not an anchor: `~` never matches an absolute entry point.
    assert!(AbsDir::parse("~/foo").is_err());
}

#[test]
fn windows_flavored_input() {
    assert_eq!(abs_dir("\\foo\\bar\\").as_str(), "/foo/bar/");
    assert_eq!(rel_file("foo\\mu.txt").as_str(), "foo/mu.txt");
    assert!(RelFile::parse("\\foo").is_err());
}

#[test]
fn platform_invalid_input_rejected() {
    assert!(RelFile::parse("foo\nbar").is_err());
    assert!(RelFile::parse("foo\rbar").is_err());
    assert!(AbsDir::parse("/fo\0o/").is_err());
    assert!(AbsFile::parse("/dev/NUL").is_err());
    assert!(RelFile::parse("COM1.txt").is_err());
}

#[test]
fn reparsing_canonical_is_identity() {
    let p = abs_dir("///x//y/");
    assert_eq!(AbsDir::parse(p.as_str()).unwrap(), p);
    assert!(AbsDir::is_canonical(p.as_str()));
    assert!(!AbsDir::is_canonical("///x//y/"));

    assert!(AbsDir::is_canonical("/foo/bar/mu/"));
    assert!(AbsDir::is_canonical("/"));
    assert!(RelDir::is_canonical("~/foo/"));
    assert!(RelDir::is_canonical(""));
    assert!(RelFile::is_canonical("a/b/c"));
    assert!(!RelDir::is_canonical("./"));
    assert!(!AbsFile::is_canonical("/foo/"));
}

#[test]
fn rejection_reports_input_and_tags() {
    let err = AbsDir::parse("..").unwrap_err();
    assert_eq!(err.input(), "..");
    assert_eq!(err.expected(), ("absolute", "directory"));
    assert_eq!(err.to_string(), "malformed absolute directory path: \"..\"");

    let err = RelFile::parse("").unwrap_err();
    assert_eq!(err.expected(), ("relative", "file"));
}
