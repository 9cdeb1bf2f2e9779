use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn pdfoptimize(args: &[&str], gs: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdfoptimize"))
        .args(args)
        .env("PDFOPTIMIZE_GS", gs)
        .output()
        .expect("Failed to run pdfoptimize")
}

/// Path that is guaranteed not to be a Ghostscript binary
fn missing_gs() -> PathBuf {
    PathBuf::from("/nonexistent/pdfoptimize-test/gs")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_requires_input_argument() {
    let output = pdfoptimize(&[], &missing_gs());
    assert!(!output.status.success());
}

#[test]
fn test_rejects_three_positionals() {
    let output = pdfoptimize(&["a.pdf", "b.pdf", "c.pdf"], &missing_gs());
    assert!(!output.status.success());
}

#[test]
fn test_output_with_inplace_has_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    let target = dir.path().join("out.pdf");
    fs::write(&input, b"%PDF-1.4 original").unwrap();

    let output = pdfoptimize(
        &["--inplace", input.to_str().unwrap(), target.to_str().unwrap()],
        &missing_gs(),
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("output argument not allowed with --inplace flag"));
    assert!(stdout(&output).is_empty());
    assert!(!target.exists());
    assert_eq!(fs::read(&input).unwrap(), b"%PDF-1.4 original");
}

#[test]
fn test_invalid_style() {
    let output = pdfoptimize(&["--style", "web", "doc.pdf"], &missing_gs());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid style 'web'"));
}

#[test]
fn test_conflicting_profile_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    fs::write(&input, b"%PDF-1.4").unwrap();

    let output = pdfoptimize(&["--print", "--ebook", input.to_str().unwrap()], &missing_gs());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("conflicting profile flags"));
    assert!(!dir.path().join("doc.print.pdf").exists());
    assert!(!dir.path().join("doc.ebook.pdf").exists());
}

#[test]
fn test_missing_input_reports_size_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.pdf");

    let output = pdfoptimize(&[input.to_str().unwrap()], &missing_gs());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error reading original file size"));
    assert!(!dir.path().join("missing.screen.pdf").exists());
}

#[test]
fn test_engine_spawn_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.pdf");
    fs::write(&input, b"%PDF-1.4").unwrap();

    let output = pdfoptimize(&["-q", input.to_str().unwrap()], &missing_gs());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error optimizing PDF"));
    assert!(stdout(&output).is_empty());
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Stand-in for Ghostscript: writes the first half of the input to -sOutputFile
#[cfg(unix)]
fn fake_gs(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-gs",
        r#"#!/bin/sh
out=""
for arg in "$@"; do
    case "$arg" in
        -sOutputFile=*) out="${arg#-sOutputFile=}" ;;
    esac
    input="$arg"
done
size=$(wc -c < "$input")
head -c $((size / 2)) "$input" > "$out"
"#,
    )
}

/// Ghostscript that leaves partial output behind and exits with status 3
#[cfg(unix)]
fn broken_gs(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "broken-gs",
        r#"#!/bin/sh
for arg in "$@"; do
    case "$arg" in
        -sOutputFile=*) printf 'partial' > "${arg#-sOutputFile=}" ;;
    esac
done
echo "Unrecoverable error in PDF stream" >&2
exit 3
"#,
    )
}

#[cfg(unix)]
#[test]
fn test_optimize_to_generated_path() {
    let dir = tempfile::tempdir().unwrap();
    let gs = fake_gs(dir.path());
    let input = dir.path().join("report.pdf");
    fs::write(&input, vec![b'x'; 2000]).unwrap();

    let output = pdfoptimize(&["-e", input.to_str().unwrap()], &gs);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let generated = dir.path().join("report.ebook.pdf");
    assert_eq!(fs::metadata(&generated).unwrap().len(), 1000);

    let text = stdout(&output);
    assert!(text.contains("for ebook..."));
    assert!(text.contains("Original size: 2.0 KB"));
    assert!(text.contains("New size: 1000 B"));
    assert!(text.contains("Change: 50% smaller"));
}

#[cfg(unix)]
#[test]
fn test_optimize_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let gs = fake_gs(dir.path());
    let input = dir.path().join("scan.pdf");
    fs::write(&input, vec![b'x'; 4096]).unwrap();

    let output = pdfoptimize(&["-i", "--dpi", "150", input.to_str().unwrap()], &gs);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fs::metadata(&input).unwrap().len(), 2048);
    assert!(!dir.path().join("scan.pdf.pdfoptimize.tmp").exists());
    assert!(stdout(&output).contains("New size: 2.0 KB"));
}

#[cfg(unix)]
#[test]
fn test_silent_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let gs = fake_gs(dir.path());
    let input = dir.path().join("doc.pdf");
    let target = dir.path().join("small.pdf");
    fs::write(&input, vec![b'x'; 100]).unwrap();

    let output = pdfoptimize(
        &["--silent", "--style", "print", input.to_str().unwrap(), target.to_str().unwrap()],
        &gs,
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(fs::metadata(&target).unwrap().len(), 50);
}

#[cfg(unix)]
#[test]
fn test_failed_in_place_leaves_input_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let gs = broken_gs(dir.path());
    let input = dir.path().join("scan.pdf");
    fs::write(&input, b"original").unwrap();

    let output = pdfoptimize(&["-i", input.to_str().unwrap()], &gs);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error optimizing PDF"));
    assert!(err.contains("exit code 3"));
    assert!(err.contains("Unrecoverable error in PDF stream"));
    assert_eq!(fs::read(&input).unwrap(), b"original");
    assert!(!dir.path().join("scan.pdf.pdfoptimize.tmp").exists());
}

#[cfg(unix)]
#[test]
fn test_failed_optimize_reports_engine_message() {
    let dir = tempfile::tempdir().unwrap();
    let gs = broken_gs(dir.path());
    let input = dir.path().join("doc.pdf");
    fs::write(&input, b"original").unwrap();

    let output = pdfoptimize(&["--print", input.to_str().unwrap()], &gs);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("exit code 3"));
    assert!(err.contains("Unrecoverable error in PDF stream"));
    assert!(!stdout(&output).contains("New size"));
    assert_eq!(fs::read(&input).unwrap(), b"original");
}
