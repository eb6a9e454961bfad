use assert_cmd::Command;
use std::fs;
use std::path::Path;

fn setup_vault(root: &Path) -> std::path::PathBuf {
    let concepts = root.join("CONCEPTS");
    fs::create_dir(&concepts).unwrap();
    concepts
}

fn write_concept(concepts: &Path, filename: &str, content: &str) {
    fs::write(concepts.join(filename), content).unwrap();
}

#[test]
fn test_generates_index_with_categorized_tables() {
    let temp_dir = tempfile::tempdir().unwrap();
    let concepts = setup_vault(temp_dir.path());

    write_concept(
        &concepts,
        "UMA-005-origins.md",
        "# UMA-005: 起源\n\n## 定义\n最早的概念。\n\n## 相关概念\n- **同意**：见 UMA-150\n",
    );
    write_concept(
        &concepts,
        "UMA-150-consent.md",
        "# UMA-150: 同意\n\n## 定义\n关于授权的概念。\n\n## 贡献者\n- Alice\n",
    );
    // Outside the declared ranges: counted in the total, shown in no table.
    write_concept(
        &concepts,
        "UMA-705-overflow.md",
        "# UMA-705: 溢出\n\n## 定义\n编号计划之外。\n",
    );

    let mut cmd = Command::cargo_bin("concept-index").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("3 concepts indexed"))
        .stdout(predicates::str::contains("哲学基础 (UMA-000 ~ UMA-099): 1"))
        .stdout(predicates::str::contains("技术伦理 (UMA-100 ~ UMA-199): 1"))
        .stdout(predicates::str::contains("社区传播 (UMA-600 ~ UMA-699): 0"));

    let index = fs::read_to_string(concepts.join("README.md")).unwrap();
    assert!(index.contains("# 概念库"));
    assert!(index.contains("## 概念索引（共3个概念）"));
    assert!(index.contains("### 哲学基础 (UMA-000 ~ UMA-099)"));
    assert!(index.contains("| [UMA-005](./UMA-005-origins.md) | 起源 |"));
    assert!(index.contains("| [UMA-150](./UMA-150-consent.md) | 同意 |"));
    assert_eq!(index.matches("| [UMA-").count(), 2);
    assert!(!index.contains("UMA-705"));
}

#[test]
fn test_rerun_overwrites_and_skips_own_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let concepts = setup_vault(temp_dir.path());
    write_concept(&concepts, "UMA-010-stable.md", "# UMA-010: 稳定\n");

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("concept-index").unwrap();
        cmd.current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout(predicates::str::contains("1 concepts indexed"));
    }

    let index = fs::read_to_string(concepts.join("README.md")).unwrap();
    // The README itself must never show up as a concept row.
    assert_eq!(index.matches("| [UMA-").count(), 1);
}

#[test]
fn test_bad_file_skipped_with_warning_exit_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let concepts = setup_vault(temp_dir.path());
    write_concept(&concepts, "UMA-010-good.md", "# UMA-010: 好的\n");
    fs::write(concepts.join("UMA-011-binary.md"), [0xffu8, 0xfe]).unwrap();

    let mut cmd = Command::cargo_bin("concept-index").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("1 concepts indexed"))
        .stderr(predicates::str::contains("UMA-011-binary.md"));
}

#[test]
fn test_missing_concepts_dir_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("concept-index").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("CONCEPTS"));
}
