use std::io::{self, Stdout, Write};

use colored::Colorize;

use super::collect::ArchitectureInfo;

/// Writes the two-line labeled report for an [`ArchitectureInfo`].
///
/// Labels carry a green accent; the `colored` crate drops the escape codes
/// on terminals without color support and under `NO_COLOR`, so the report
/// shape never changes. [`Reporter::plain`] skips the accent entirely,
/// which keeps captured output byte-stable.
pub struct Reporter<W> {
    out: W,
    color: bool,
}

impl Reporter<Stdout> {
    /// Reporter over standard output with colored labels.
    pub fn stdout() -> Self {
        Reporter::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out, color: true }
    }

    /// Reporter that never emits escape codes.
    pub fn plain(out: W) -> Self {
        Reporter { out, color: false }
    }

    /// Writes the report, values verbatim, Architecture line first.
    ///
    /// Accepts any record; the only failure mode is the underlying write,
    /// which propagates unchanged.
    pub fn report(&mut self, info: &ArchitectureInfo) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", "Architecture:".green(), info.bitness())?;
            writeln!(self.out, "{} {}", "Machine:".green(), info.machine())?;
        } else {
            writeln!(self.out, "Architecture: {}", info.bitness())?;
            writeln!(self.out, "Machine: {}", info.machine())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn info(bitness: &str, machine: &str) -> ArchitectureInfo {
        ArchitectureInfo::new(bitness.to_string(), machine.to_string())
    }

    #[test]
    fn renders_the_sample_report() {
        let mut out = Vec::new();
        Reporter::plain(&mut out).report(&info("64bit", "x86_64")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Architecture: 64bit\nMachine: x86_64\n"
        );
    }

    #[rstest]
    #[case("64bit", "aarch64")]
    #[case("32bit", "armv7l")]
    #[case("64bit", "")]
    #[case("", "unknown")]
    #[case("64bit", "weird label with spaces")]
    fn writes_two_lines_with_values_verbatim(#[case] bitness: &str, #[case] machine: &str) {
        let mut out = Vec::new();
        Reporter::plain(&mut out).report(&info(bitness, machine)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("Architecture: {}", bitness));
        assert_eq!(lines[1], format!("Machine: {}", machine));
    }

    #[test]
    fn colored_report_keeps_shape_and_values() {
        let mut out = Vec::new();
        Reporter::new(&mut out).report(&info("64bit", "riscv64")).unwrap();

        // Escape codes depend on the environment; the line count and the
        // verbatim values do not.
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().ends_with(" 64bit"));
        assert!(text.lines().nth(1).unwrap().ends_with(" riscv64"));
    }

    #[test]
    fn write_failure_propagates() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Reporter::plain(Broken).report(&info("64bit", "x86_64")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
