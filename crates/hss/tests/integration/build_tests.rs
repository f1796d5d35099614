use predicates::prelude::*;
use serial_test::serial;

use super::common::TestEnv;

const INVENTORY: &str = r#"
all:
  hosts:
    localhost:
      ansible_host: 127.0.0.1
    node1:
      ansible_host: 10.0.0.11
      ansible_user: admin
    node2:
      ansible_host: 10.0.0.12
      ansible_port: 2222
"#;

fn lab() -> TestEnv {
  let env = TestEnv::new();
  env
    .inventory(INVENTORY)
    .host_vars("node1", "id_node1", "id_node1.pub")
    .host_vars("node2", "id_foo", "id_foo.pub")
    .ssh_key("git_provisioning_key")
    .ssh_key("id_node1")
    .ssh_key("id_node1.pub")
    .ssh_key("id_foo")
    .ssh_key("id_foo.pub");
  env
}

#[test]
#[serial]
fn build_stages_keys_for_docker_and_cleans_up() {
  let env = lab();

  env
    .hss_cmd()
    .arg("build")
    .env("FAKE_DOCKER_WATCH", env.staging_dir())
    .assert()
    .success()
    .stdout(predicate::str::contains("Copying SSH keys for node1"))
    .stdout(predicate::str::contains("Copying SSH keys for node2"))
    .stdout(predicate::str::contains("localhost").not());

  let calls = env.docker_calls();
  assert!(calls[0].ends_with("/repo :: build --platform linux/amd64 -t hss ."), "{calls:?}");
  assert_eq!(
    &calls[1..],
    [
      "  staged: git_provisioning_key",
      "  staged: node1_private_key",
      "  staged: node1_public_key.pub",
      "  staged: node2_private_key",
      "  staged: node2_public_key.pub",
    ]
  );

  assert!(!env.staging_dir().exists());
}

#[test]
#[serial]
fn build_twice_leaves_no_staging_directory() {
  let env = lab();

  env.hss_cmd().arg("build").assert().success();
  assert!(!env.staging_dir().exists());

  env.hss_cmd().arg("build").assert().success();
  assert!(!env.staging_dir().exists());

  assert_eq!(env.docker_calls().len(), 2);
}

#[test]
#[serial]
fn build_with_missing_key_fails_without_docker() {
  let env = lab();
  std::fs::remove_file(env.ssh_dir().join("id_foo.pub")).unwrap();

  env
    .hss_cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("SSH key does not exist"))
    .stderr(predicate::str::contains(env.ssh_dir().join("id_foo.pub").display().to_string()));

  assert!(env.docker_calls().is_empty());
  assert!(!env.staging_dir().exists());
}

#[test]
#[serial]
fn build_docker_failure_is_fatal_and_cleans_up() {
  let env = lab();

  env
    .hss_cmd()
    .arg("build")
    .env("FAKE_DOCKER_EXIT", "2")
    .assert()
    .failure()
    .stderr(predicate::str::contains("exit code 2"));

  assert!(!env.staging_dir().exists());
}

#[test]
#[serial]
fn build_without_inventory_fails() {
  let env = TestEnv::new();

  env
    .hss_cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("inventory.yml"));
}

#[test]
#[serial]
fn build_respects_root_override() {
  let env = lab();
  let elsewhere = env.temp.path().join("elsewhere");
  std::fs::create_dir_all(&elsewhere).unwrap();

  env
    .hss_cmd()
    .arg("build")
    .current_dir(&elsewhere)
    .env("HSS_ROOT", env.root())
    .assert()
    .success();

  let calls = env.docker_calls();
  assert!(calls[0].ends_with("/repo :: build --platform linux/amd64 -t hss ."), "{calls:?}");
  assert!(!elsewhere.join("ssh_keys").exists());
}
