use std::fs;

use super::{Command, CommandError, Context, Outcome};
use crate::core::output::LineStyle;
use crate::path::PathExpander;

/// Lists subdirectories first, then everything else. Entries keep the order
/// the filesystem returns them in.
#[derive(Clone)]
pub struct LsCommand {
    path_expander: PathExpander,
}

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for LsCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &str) -> Result<Outcome, CommandError> {
        let target = if args.trim().is_empty() {
            ctx.session.current_dir().to_path_buf()
        } else {
            self.path_expander
                .resolve(ctx.session.current_dir(), args)?
        };

        if !target.is_dir() {
            let shown = if args.trim().is_empty() {
                target.display().to_string()
            } else {
                args.to_string()
            };
            return Err(CommandError::PathNotFound(shown));
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in fs::read_dir(&target).map_err(CommandError::io("listing"))? {
            let entry = entry.map_err(CommandError::io("listing"))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }

        ctx.print(format!("Contents of '{}':", target.display()));
        for name in dirs {
            ctx.emit(format!("  <DIR> {}", name), LineStyle::Directory);
        }
        for name in files {
            ctx.emit(format!("  {}", name), LineStyle::File);
        }
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::{run_command, FakeRunner};
    use crate::core::output::ScrollbackSink;
    use crate::core::state::Session;
    use tempfile::TempDir;

    fn populated() -> TempDir {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("f.txt"), "hello").expect("write file");
        fs::create_dir(temp.path().join("A")).expect("create A");
        fs::create_dir(temp.path().join("B")).expect("create B");
        temp
    }

    #[test]
    fn test_ls_dirs_before_files() {
        let temp = populated();
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();

        run_command(&LsCommand::new(), &mut session, &mut sink, &FakeRunner::default(), "")
            .expect("ls");

        let lines = sink.lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].style, LineStyle::Plain);
        assert!(lines[0].text.starts_with("Contents of '"));

        let mut dirs: Vec<&str> = lines[1..3].iter().map(|l| l.text.as_str()).collect();
        dirs.sort_unstable();
        assert_eq!(dirs, vec!["  <DIR> A", "  <DIR> B"]);
        assert!(lines[1..3].iter().all(|l| l.style == LineStyle::Directory));

        assert_eq!(lines[3].text, "  f.txt");
        assert_eq!(lines[3].style, LineStyle::File);
    }

    #[test]
    fn test_ls_subpath_does_not_move_session() {
        let temp = populated();
        fs::write(temp.path().join("A").join("inner.rs"), "").expect("write inner");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();

        run_command(&LsCommand::new(), &mut session, &mut sink, &FakeRunner::default(), "A")
            .expect("ls A");

        assert_eq!(sink.with_style(LineStyle::File).len(), 1);
        assert!(sink.with_style(LineStyle::Directory).is_empty());
        assert_eq!(session.current_dir(), temp.path());
    }

    #[test]
    fn test_ls_missing_path() {
        let temp = populated();
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();

        let result = run_command(
            &LsCommand::new(),
            &mut session,
            &mut sink,
            &FakeRunner::default(),
            "ghost",
        );
        assert!(matches!(result, Err(CommandError::PathNotFound(ref p)) if p == "ghost"));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_ls_empty_dir_prints_header_only() {
        let temp = TempDir::new().expect("temp dir");
        let mut session = Session::new(temp.path()).expect("session");
        let mut sink = ScrollbackSink::new();

        run_command(&LsCommand::new(), &mut session, &mut sink, &FakeRunner::default(), "")
            .expect("ls");
        assert_eq!(sink.lines().len(), 1);
    }
}
