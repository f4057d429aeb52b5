//! Where reports end up.

/// Sink for report content. Reports only say what kind of text they emit;
/// the sink picks the stream and decoration.
pub trait Output {
    fn line(&mut self, text: &str);

    /// `label value` on one line, e.g. `Found 3 files`.
    fn key_value(&mut self, label: &str, value: &str);

    /// Goes to stderr, prefixed with `warning: `.
    fn warning(&mut self, msg: &str);

    fn divider(&mut self, label: &str);

    /// Emitted verbatim, with a trailing newline added only if missing.
    fn preformatted(&mut self, text: &str);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes content to stdout and warnings to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn key_value(&mut self, label: &str, value: &str) {
        println!("{label} {value}");
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    fn divider(&mut self, label: &str) {
        println!("── {label} ──");
    }

    fn preformatted(&mut self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }
}

/// Captures both streams line by line.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn line(&mut self, text: &str) {
        self.stdout.push(text.to_owned());
    }

    fn key_value(&mut self, label: &str, value: &str) {
        self.stdout.push(format!("{label} {value}"));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push(format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.stdout.push(format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push(text.to_owned());
    }
}
