//! Tests for RepoService
#![cfg(unix)]

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use repo_create::application::services::RepoService;
use repo_create::application::ApplicationError;
use repo_create::config::Settings;
use repo_create::domain::{CreationRequest, Visibility};
use repo_create::infrastructure::traits::{CommandRunner, RealCommandRunner};

/// Canned reaction of the fake external tool.
enum Reply {
    Exit {
        code: i32,
        stdout: &'static str,
        stderr: &'static str,
    },
    SpawnError(io::ErrorKind),
}

/// Command runner that records every call and answers with a canned reply.
struct RecordingRunner {
    reply: Reply,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn exiting(code: i32, stdout: &'static str, stderr: &'static str) -> Arc<Self> {
        Self::new(Reply::Exit {
            code,
            stdout,
            stderr,
        })
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn last_call(&self) -> Vec<String> {
        self.calls().last().cloned().expect("runner was called")
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<Output> {
        let mut call = vec![cmd.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.lock().unwrap().push(call);

        match &self.reply {
            Reply::Exit {
                code,
                stdout,
                stderr,
            } => Ok(Output {
                status: ExitStatus::from_raw(code << 8),
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
            }),
            Reply::SpawnError(kind) => Err(io::Error::from(*kind)),
        }
    }
}

fn service_with(runner: Arc<dyn CommandRunner>) -> RepoService {
    RepoService::new(runner, Arc::new(Settings::default()))
}

fn service_for_program(program: &str) -> RepoService {
    let settings = Settings {
        gh_program: program.to_string(),
        ..Settings::default()
    };
    RepoService::new(Arc::new(RealCommandRunner), Arc::new(settings))
}

fn request() -> CreationRequest {
    CreationRequest::new("actual-software", "test-repo").unwrap()
}

// ============================================================
// Successful creation
// ============================================================

#[test]
fn given_tool_exits_zero_when_invoke_then_returns_outcome_with_stdout() {
    // Arrange
    let runner = RecordingRunner::exiting(0, "Created repository actual-software/test-repo", "");
    let service = service_with(runner.clone());
    let request = request().with_description(Some("Test repository".into()));

    // Act
    let outcome = service.invoke(&request).unwrap();

    // Assert
    assert_eq!(outcome.slug, "actual-software/test-repo");
    assert_eq!(outcome.stdout, "Created repository actual-software/test-repo");
    assert_eq!(runner.calls().len(), 1);
    let call = runner.last_call();
    for expected in ["gh", "repo", "create", "actual-software/test-repo"] {
        assert!(call.iter().any(|a| a == expected), "missing {expected}");
    }
}

#[test]
fn given_private_request_when_invoke_then_passes_private_only() {
    // Arrange
    let runner = RecordingRunner::exiting(0, "Created", "");
    let service = service_with(runner.clone());

    // Act
    service
        .invoke(&request().with_visibility(Visibility::Private))
        .unwrap();

    // Assert
    let call = runner.last_call();
    assert!(call.contains(&"--private".to_string()));
    assert!(!call.contains(&"--public".to_string()));
}

#[test]
fn given_default_request_when_invoke_then_passes_public_only() {
    // Arrange
    let runner = RecordingRunner::exiting(0, "Created", "");
    let service = service_with(runner.clone());

    // Act
    service.invoke(&request()).unwrap();

    // Assert
    let call = runner.last_call();
    assert!(call.contains(&"--public".to_string()));
    assert!(!call.contains(&"--private".to_string()));
}

#[test]
fn given_description_and_clone_when_invoke_then_exact_argument_order() {
    // Arrange
    let runner = RecordingRunner::exiting(0, "", "");
    let service = service_with(runner.clone());
    let request = request()
        .with_description(Some("Test repository".into()))
        .with_clone(true);

    // Act
    service.invoke(&request).unwrap();

    // Assert
    assert_eq!(
        runner.last_call(),
        vec![
            "gh",
            "repo",
            "create",
            "actual-software/test-repo",
            "--confirm",
            "--description",
            "Test repository",
            "--public",
            "--clone",
        ]
    );
}

// ============================================================
// Failure classification
// ============================================================

#[test]
fn given_tool_exits_nonzero_when_invoke_then_external_tool_failed() {
    // Arrange
    let runner = RecordingRunner::exiting(1, "", "Error: already exists");
    let service = service_with(runner.clone());

    // Act
    let err = service.invoke(&request()).unwrap_err();

    // Assert
    assert!(err.is_external_failure());
    match err {
        ApplicationError::ExternalToolFailed { stderr, exit_code } => {
            assert_eq!(stderr, "Error: already exists");
            assert_eq!(exit_code, Some(1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.calls().len(), 1, "failures are never retried");
}

#[test]
fn given_tool_missing_when_invoke_then_tool_not_installed() {
    // Arrange
    let runner = RecordingRunner::new(Reply::SpawnError(io::ErrorKind::NotFound));
    let service = service_with(runner);

    // Act
    let err = service.invoke(&request()).unwrap_err();

    // Assert
    assert!(err.is_tool_not_installed());
    assert_eq!(
        err.to_string(),
        "gh CLI not found. Please install it: https://cli.github.com/"
    );
}

#[test]
fn given_other_spawn_error_when_invoke_then_operation_failed() {
    // Arrange
    let runner = RecordingRunner::new(Reply::SpawnError(io::ErrorKind::PermissionDenied));
    let service = service_with(runner);

    // Act
    let err = service.invoke(&request()).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(!err.is_tool_not_installed());
    assert!(!err.is_external_failure());
}

// ============================================================
// Real processes
// ============================================================

#[test]
fn given_real_program_exiting_zero_when_invoke_then_succeeds() {
    let service = service_for_program("true");

    let outcome = service.invoke(&request()).unwrap();

    assert_eq!(outcome.slug, "actual-software/test-repo");
}

#[test]
fn given_real_program_exiting_nonzero_when_invoke_then_external_tool_failed() {
    let service = service_for_program("false");

    let err = service.invoke(&request()).unwrap_err();

    assert!(err.is_external_failure());
}

#[test]
fn given_missing_program_when_invoke_then_tool_not_installed() {
    let service = service_for_program("repo-create-test-no-such-binary");

    let err = service.invoke(&request()).unwrap_err();

    assert!(err.is_tool_not_installed());
    assert!(err.to_string().contains("repo-create-test-no-such-binary"));
}

#[test]
fn given_request_when_plan_then_uses_configured_program() {
    let service = service_for_program("/usr/local/bin/gh");

    let invocation = service.plan(&request());

    assert_eq!(invocation.program(), "/usr/local/bin/gh");
    assert_eq!(invocation.args()[2], "actual-software/test-repo");
}
