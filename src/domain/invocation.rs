//! External tool invocation: program plus ordered arguments

use std::fmt;

use crate::domain::CreationRequest;

/// Ordered program name and arguments handed to the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Build the `repo create` invocation for a request.
    ///
    /// Layout, in this exact order:
    /// `<program> repo create <org>/<name> --confirm [--description <text>] (--private|--public) [--clone]`
    pub fn for_request(program: impl Into<String>, request: &CreationRequest) -> Self {
        let mut args: Vec<String> = vec![
            "repo".into(),
            "create".into(),
            request.slug(),
            "--confirm".into(),
        ];

        if let Some(description) = request.description() {
            args.extend(["--description".to_string(), description.to_string()]);
        }

        args.push(request.visibility().flag().to_string());

        if request.clone_after_create() {
            args.push("--clone".into());
        }

        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments as string slices, the shape `CommandRunner::run` takes.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }

    /// Program followed by all arguments.
    pub fn to_vec(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
