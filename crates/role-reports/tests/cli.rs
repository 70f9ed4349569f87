use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn items_csv(&self) -> PathBuf {
        self.write(
            "items.csv",
            "id,name,value\n1,Pens,100\n2,Monitor,600\n3,Chair,500\n4,Server,1500\n",
        )
    }

    /// Runs in the temp dir so a stray config.toml in the repo is never read
    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("role-reports");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

#[test]
fn generate_csv_for_standard_user() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .success()
        .stdout("ID,NOME,VALOR,USUARIO\n1,Pens,100,Ana\n3,Chair,500,Ana\n\nTotal,,\n600,,\n");
}

#[test]
fn generate_html_for_admin_from_json() {
    let env = TestEnv::new();
    let items = env.write(
        "items.json",
        r#"[{"id": 1, "name": "Big", "value": 1500}, {"id": 2, "name": "Small", "value": 900}]"#,
    );

    env.cmd()
        .args(["generate", "--format", "HTML", "--user-name", "Root", "--role", "ADMIN"])
        .arg(&items)
        .assert()
        .success()
        .stdout(contains("<h2>Usuário: Root</h2>"))
        .stdout(contains(
            "<tr style=\"font-weight:bold;\"><td>1</td><td>Big</td><td>1500</td></tr>",
        ))
        .stdout(contains("<tr><td>2</td><td>Small</td><td>900</td></tr>"))
        .stdout(contains("<h3>Total: 2400</h3>"));
}

#[test]
fn unsupported_format_prints_empty_report() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["generate", "--format", "PDF", "--user-name", "Ana", "--role", "ADMIN"])
        .arg(&items)
        .assert()
        .success()
        .stdout("\n")
        .stderr(contains("Warning: Report format \"PDF\" is not supported"));
}

#[test]
fn unknown_role_warns_and_reports_zero_total() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Eve", "--role", "GUEST"])
        .arg(&items)
        .assert()
        .success()
        .stdout("ID,NOME,VALOR,USUARIO\n\nTotal,,\n0,,\n")
        .stderr(contains("Warning: Role \"GUEST\" is not recognized"))
        .stderr(contains("Debug:").not());
}

#[test]
fn verbose_flag_enables_debug_lines() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["-v", "generate", "--format", "CSV", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .success()
        .stderr(contains("Debug: Loaded 4 items"))
        .stderr(contains("Debug: 2 of 4 items visible to Ana (USER)"))
        .stderr(contains("Debug: Total over visible items: 600"));

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .success()
        .stderr(contains("Debug:").not());
}

#[test]
fn strict_flag_rejects_unknown_role() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["generate", "--strict", "--format", "CSV", "--user-name", "Eve", "--role", "GUEST"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(contains("unrecognized role"));
}

#[test]
fn config_file_overrides_policy_and_enables_strict() {
    let env = TestEnv::new();
    let items = env.items_csv();
    env.write(
        "config.toml",
        "[policy]\nvisibility_limit = 100\n\n[render]\nstrict = true\n",
    );

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .success()
        .stdout("ID,NOME,VALOR,USUARIO\n1,Pens,100,Ana\n\nTotal,,\n100,,\n");

    env.cmd()
        .args(["generate", "--format", "XML", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(contains("unsupported report format"));
}

#[test]
fn output_file_receives_report() {
    let env = TestEnv::new();
    let items = env.items_csv();
    let out = env.dir.path().join("report.csv");

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Root", "--role", "ADMIN", "-o"])
        .arg(&out)
        .arg(&items)
        .assert()
        .success()
        .stdout(contains("Generated:"));

    let written = fs::read_to_string(&out).expect("read report");
    assert!(written.starts_with("ID,NOME,VALOR,USUARIO\n1,Pens,100,Root\n"));
    assert!(written.ends_with("Total,,\n2700,,\n"));
}

#[test]
fn visible_lists_items_and_total() {
    let env = TestEnv::new();
    let items = env.items_csv();

    env.cmd()
        .args(["visible", "--role", "ADMIN"])
        .arg(&items)
        .assert()
        .success()
        .stdout(contains("Server"))
        .stdout(contains("yes"))
        .stdout(contains("4 of 4 item(s) visible to ADMIN"));

    env.cmd()
        .args(["visible", "--role", "GUEST"])
        .arg(&items)
        .assert()
        .success()
        .stdout(contains("No items visible"));
}

#[test]
fn malformed_items_file_fails_with_context() {
    let env = TestEnv::new();
    let items = env.write("items.csv", "id,name,value\n1,Pens,cheap\n");

    env.cmd()
        .args(["generate", "--format", "CSV", "--user-name", "Ana", "--role", "USER"])
        .arg(&items)
        .assert()
        .failure()
        .stderr(contains("Invalid item on data row 1"));
}
