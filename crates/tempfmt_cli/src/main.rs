//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tempfmt_core` linkage.
//! - Print every rendering of each Celsius value given as an argument.

use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run(
        std::env::args().skip(1),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Writes the banner and one line per argument; any invalid argument fails the run.
fn run<I>(args: I, out: &mut impl Write, err: &mut impl Write) -> ExitCode
where
    I: IntoIterator<Item = String>,
{
    match write_report(args, out, err) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(io_err) => {
            let _ = writeln!(err, "failed to write output: {io_err}");
            ExitCode::FAILURE
        }
    }
}

fn write_report<I>(args: I, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<bool>
where
    I: IntoIterator<Item = String>,
{
    writeln!(out, "tempfmt_core version={}", tempfmt_core::core_version())?;
    writeln!(out, "tempfmt_core locale={}", tempfmt_core::default_locale())?;

    let mut all_valid = true;
    for arg in args {
        match arg.trim().parse::<f64>() {
            Ok(celsius) => writeln!(out, "{}", describe(celsius))?,
            Err(parse_err) => {
                writeln!(err, "invalid celsius value `{arg}`: {parse_err}")?;
                all_valid = false;
            }
        }
    }
    Ok(all_valid)
}

fn describe(celsius: f64) -> String {
    format!(
        "celsius={} fahrenheit={} locale={} description={}",
        tempfmt_core::format_celsius(celsius),
        tempfmt_core::format_fahrenheit(tempfmt_core::celsius_to_fahrenheit(celsius)),
        tempfmt_core::format_with_default_locale(celsius),
        tempfmt_core::temperature_description(celsius)
    )
}

#[cfg(test)]
mod tests {
    use super::{describe, run};
    use std::process::ExitCode;

    fn run_with(args: &[&str]) -> (String, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().map(|arg| arg.to_string()), &mut out, &mut err);
        (
            exit_code_name(code),
            String::from_utf8(out).expect("stdout should be UTF-8"),
            String::from_utf8(err).expect("stderr should be UTF-8"),
        )
    }

    fn exit_code_name(code: ExitCode) -> String {
        format!("{code:?}")
    }

    #[test]
    fn describe_renders_both_units_and_band() {
        let line = describe(0.0);
        assert!(line.starts_with("celsius=0°C fahrenheit=32°F locale="));
        assert!(line.ends_with("description=Cold"));
    }

    #[test]
    fn run_succeeds_when_every_argument_is_numeric() {
        let (code, out, err) = run_with(&["12.5", " -3 "]);
        assert_eq!(code, exit_code_name(ExitCode::SUCCESS));
        assert!(err.is_empty());

        let results = out
            .lines()
            .filter(|line| line.starts_with("celsius="))
            .collect::<Vec<_>>();
        assert_eq!(results.len(), 2);
        assert!(results[1].starts_with("celsius=-3°C fahrenheit=26.6°F"));
    }

    #[test]
    fn run_reports_non_numeric_argument_and_fails() {
        let (code, out, err) = run_with(&["12.5", "abc"]);
        assert_eq!(code, exit_code_name(ExitCode::FAILURE));

        let results = out
            .lines()
            .filter(|line| line.starts_with("celsius="))
            .collect::<Vec<_>>();
        assert_eq!(results.len(), 1);
        assert!(results[0].starts_with("celsius=12.5°C fahrenheit=54.5°F"));

        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("invalid celsius value `abc`"));
    }
}
