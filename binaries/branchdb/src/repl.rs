use {
    crate::display,
    executor::{Executor, Session},
    std::io::{self, BufRead, Write},
};

const PROMPT: &str = "branchdb > ";
const CONTINUATION: &str = "       ... ";
const EXIT: &str = ".exit";

/// Executes every statement of `sql`, writing each outcome or error.
pub(crate) fn run_statements<W: Write>(
    executor: &Executor,
    session: &mut Session,
    sql: &str,
    out: &mut W,
) -> io::Result<()> {
    for result in executor.execute_sql(session, sql) {
        match result {
            Ok(outcome) => writeln!(out, "{}", display::render(&outcome))?,
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}

/// Reads lines until a `;` closes at least one statement, then runs all
/// complete statements. Text after the last `;` waits for more input.
pub(crate) struct Repl<'a, W> {
    executor: &'a Executor,
    session: Session,
    out: W,
    buffer: String,
}

impl<'a, W: Write> Repl<'a, W> {
    pub(crate) fn new(executor: &'a Executor, out: W) -> Self {
        Self {
            executor,
            session: Session::new(),
            out,
            buffer: String::new(),
        }
    }

    pub(crate) fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            if self.buffer.trim().is_empty() && line.trim() == EXIT {
                return Ok(());
            }

            self.buffer.push_str(&line);
            self.buffer.push('\n');

            if let Some(end) = self.buffer.rfind(';') {
                let rest = self.buffer.split_off(end + 1);
                let sql = std::mem::replace(&mut self.buffer, rest);
                run_statements(self.executor, &mut self.session, &sql, &mut self.out)?;
            }

            self.prompt()?;
        }

        // input ended inside a statement
        if !self.buffer.trim().is_empty() {
            let sql = std::mem::take(&mut self.buffer);
            run_statements(self.executor, &mut self.session, &sql, &mut self.out)?;
        }

        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        let prompt = if self.buffer.trim().is_empty() {
            PROMPT
        } else {
            CONTINUATION
        };

        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Cursor, tempfile::tempdir};

    fn run(executor: &Executor, input: &str) -> String {
        let mut out = vec![];
        Repl::new(executor, &mut out)
            .run(Cursor::new(input))
            .unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn statements_across_lines() {
        let temp_dir = tempdir().unwrap();
        let executor = Executor::open(temp_dir.path()).unwrap();

        let output = run(
            &executor,
            "CREATE DATABASE db; USE\ndb;\nCREATE TABLE t (id int,\nname varchar); INSERT\nINTO t VALUES (1, 'a');\n",
        );

        assert!(output.starts_with("branchdb > Database 'db' created\n"));
        assert!(output.contains("       ... Using database 'db'\n"));
        assert!(output.contains("Table 't' created\n"));
        assert!(output.contains("1 row inserted into 't'\n"));
        assert!(output.ends_with("branchdb > "));

        temp_dir.close().unwrap();
    }

    #[test]
    fn errors_and_exit() {
        let temp_dir = tempdir().unwrap();
        let executor = Executor::open(temp_dir.path()).unwrap();

        let output = run(
            &executor,
            "SELECT * FROM t;\nSHOW DATABASES;\n.exit\nCREATE DATABASE never;\n",
        );

        assert!(output.contains("Error: no database selected"));
        assert!(output.contains("| Databases |"));
        assert!(!output.contains("never"));
        assert!(!executor.catalog().database_exists("never"));

        temp_dir.close().unwrap();
    }

    #[test]
    fn unfinished_statement_at_end_of_input() {
        let temp_dir = tempdir().unwrap();
        let executor = Executor::open(temp_dir.path()).unwrap();

        let output = run(&executor, "SHOW DATABASES");

        assert!(output.contains(
            "Error: syntax error at position 15: expected `;`, found end of input\n"
        ));

        temp_dir.close().unwrap();
    }
}
