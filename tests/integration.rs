//! Integration tests for ndu


use std::fs;

use harness::{abc_tree, resolved_root, run_ndu};
use ndu::ResultNode;

#[test]
fn test_basic_listing() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &[]);
    assert!(success, "ndu should succeed");
    assert_eq!(stdout, "/A\t600\n/B\t300\n/C\t100\n");
}

#[test]
fn test_explicit_path_argument() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["A"]);
    assert!(success);
    assert_eq!(stdout, "/a1\t400\n/a2\t200\n");
}

#[test]
fn test_trailing_separator_in_path() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["A/"]);
    assert!(success);
    assert_eq!(stdout, "/a1\t400\n/a2\t200\n");
}

#[test]
fn test_parent_path_is_cleaned() {
    let tree = abc_tree();
    let (stdout, stderr, success) =
        run_ndu(&tree.path().join("B"), &["..", "-r", "1", "-d", "1", "-j", "out.json"]);
    assert!(success, "stderr: {}", stderr);

    let root = resolved_root(&tree);
    assert!(stdout.starts_with("/A\t600\n"), "stdout: {}", stdout);
    assert!(stdout.contains(&format!("=> {}\n", root.join("A").display())));
    assert!(!stdout.contains(".."), "stdout: {}", stdout);

    let raw = fs::read_to_string(tree.path().join("B").join("out.json")).unwrap();
    let parsed: ResultNode = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.path, root);
    assert_eq!(parsed.children[0].path, root.join("A"));
}

#[test]
fn test_max_dirs_limit() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["-n", "2"]);
    assert!(success);
    assert_eq!(stdout, "/A\t600\n/B\t300\n");
}

#[test]
fn test_human_readable_alignment() {
    let tree = abc_tree();
    tree.add_file("D/big.bin", 1536);
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["-h", "-n", "2"]);
    assert!(success);
    assert_eq!(stdout, "/D  1.5 KB\n/A   600 B\n");
}

#[test]
fn test_recursive_depth_and_breadth() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["-n", "2", "-r", "1", "-d", "1"]);
    assert!(success);

    let expected = format!(
        "/A\t600\n/B\t300\n\n=> {}\n/a1\t400\n/a2\t200\n",
        resolved_root(&tree).join("A").display()
    );
    assert_eq!(stdout, expected);
    assert!(!stdout.contains("/b1"), "B should not be expanded: {}", stdout);
}

#[test]
fn test_json_export() {
    let tree = abc_tree();
    let out = tree.path().join("out.json");
    let (_stdout, stderr, success) =
        run_ndu(tree.path(), &["-n", "2", "-r", "1", "-d", "1", "-j", "out.json"]);
    assert!(success, "stderr: {}", stderr);

    let parsed: ResultNode = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed.path, resolved_root(&tree));
    assert_eq!(parsed.size, 900);
    assert_eq!(parsed.children.len(), 2);

    let a = &parsed.children[0];
    assert_eq!(a.size, 600);
    assert_eq!(a.children.len(), 2);
    let b = &parsed.children[1];
    assert_eq!(b.size, 300);
    assert!(b.children.is_empty());
}

#[test]
fn test_json_omits_empty_children() {
    let tree = abc_tree();
    let (_stdout, _stderr, success) = run_ndu(tree.path(), &["--json", "out.json"]);
    assert!(success);

    let raw = fs::read_to_string(tree.path().join("out.json")).unwrap();
    // only the root has children at depth 0
    assert_eq!(raw.matches("\"children\"").count(), 1);
}

#[test]
fn test_html_export() {
    let tree = abc_tree();
    let (_stdout, stderr, success) = run_ndu(tree.path(), &["--html", "report.html"]);
    assert!(success, "stderr: {}", stderr);

    let html = fs::read_to_string(tree.path().join("report.html")).unwrap();
    assert!(html.contains("<canvas id=\"pieChart\">"));
    assert!(html.contains("\"size\":1000"));
}

#[test]
fn test_verbose_shows_progress() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["-v"]);
    assert!(success);
    assert!(stdout.contains("Processing directory: "));
    assert!(stdout.contains("/A\t600\n"));
    assert!(stdout.ends_with('\n'));
}

#[test]
fn test_help_lists_switches() {
    let tree = abc_tree();
    let (stdout, _stderr, success) = run_ndu(tree.path(), &["--help"]);
    assert!(success);
    for flag in ["--human-readable", "--max-dirs", "--recursive", "--html", "--auto"] {
        assert!(stdout.contains(flag), "help should mention {}: {}", flag, stdout);
    }
    assert!(stdout.contains("not a directory is an error"), "{}", stdout);
}
