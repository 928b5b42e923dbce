#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::run_solver;
use helpers::write_instance;

const SINGLE_TEACHER: &str = r#"
kind = "timetabling"
subjects = ["English", "Math"]
levels = ["1-"]
sections = ["A"]
working_days = ["Monday", "Tuesday"]

[[teachers]]
name = "Ian"
max_workload = 2

[[curriculum]]
level = "1-"
subject = "English"
slots = 1

[[curriculum]]
level = "1-"
subject = "Math"
slots = 1

[[specialties]]
subject = "English"
teachers = ["Ian"]

[[specialties]]
subject = "Math"
teachers = ["Ian"]
"#;

#[test]
fn all_solutions_are_printed_with_the_statistics() {
    let instance = write_instance("all-solutions", SINGLE_TEACHER);

    let run = run_solver(&instance, ["--all-solutions"]);
    assert!(run.status.success());

    let stdout = run.stdout();
    assert!(stdout.contains("Solution #1\n"));
    assert!(stdout.contains("Solution #2\n"));
    assert!(!stdout.contains("Solution #3\n"));
    assert!(stdout.contains("  Course 1-A | Subject English | Teacher Ian | TimeSlot "));
    assert!(stdout.contains("  - status          : exhausted\n"));
    assert!(stdout.contains("  - solutions found : 2\n"));

    run.cleanup().expect("log file is removed");
    std::fs::remove_file(instance).expect("instance file is removed");
}

#[test]
fn statistics_are_logged_on_request() {
    let instance = write_instance("statistics", SINGLE_TEACHER);

    let run = run_solver(&instance, ["-s", "--solutions", "2"]);
    assert!(run.status.success());

    let stdout = run.stdout();
    assert!(!stdout.contains("Solution #1\n"));
    assert!(stdout.contains("Solution #2\n"));
    assert!(stdout.contains("%% stat: solutionsFound=2\n"));
    assert!(stdout.contains("%% stat: solutionsReported=1\n"));
    assert!(stdout.contains("%% stat: nodes="));
    assert!(stdout.contains("%% stat: failures="));
    assert!(stdout.contains("%% stat: propagations="));
    assert_eq!(stdout.matches("%% end\n").count(), 1);
    assert!(
        stdout.find("%% stat: solutionsFound=") < stdout.find("%% stat: nodes="),
        "the solver statistics follow the run statistics"
    );

    run.cleanup().expect("log file is removed");
    std::fs::remove_file(instance).expect("instance file is removed");
}

#[test]
fn solutions_are_written_to_the_output_file() {
    let instance = write_instance("output", SINGLE_TEACHER);
    let output = instance.with_extension("csv");

    let run = run_solver(
        &instance,
        ["--all-solutions", "--max-solutions", "1", "--output"]
            .into_iter()
            .chain(output.to_str()),
    );
    assert!(run.status.success());
    assert!(!run.stdout().contains("Solution #1"));

    let written = std::fs::read_to_string(&output).expect("output file exists");
    let lines = written.lines().collect::<Vec<_>>();
    let stem = instance
        .file_stem()
        .and_then(|stem| stem.to_str())
        .expect("utf-8 file name");

    assert_eq!(lines[0], format!("Run {stem}"));
    assert_eq!(lines[2], "Solution #1");
    assert_eq!(lines.iter().filter(|line| line.starts_with("1-A, ")).count(), 2);
    assert!(!written.contains("Solution #2"));

    run.cleanup().expect("log file is removed");
    std::fs::remove_file(output).expect("output file is removed");
    std::fs::remove_file(instance).expect("instance file is removed");
}

#[test]
fn misconfigured_instance_fails() {
    let without_math_teachers = SINGLE_TEACHER.replace(
        "[[specialties]]\nsubject = \"Math\"\nteachers = [\"Ian\"]\n",
        "",
    );
    let instance = write_instance("misconfigured", &without_math_teachers);

    let run = run_solver(&instance, ["--all-solutions"]);
    assert!(!run.status.success());

    let stdout = run.stdout();
    assert!(stdout.contains("% Execution failed, error: "));
    assert!(stdout.contains("no teacher is eligible to teach subject 'Math'"));

    run.cleanup().expect("log file is removed");
    std::fs::remove_file(instance).expect("instance file is removed");
}
