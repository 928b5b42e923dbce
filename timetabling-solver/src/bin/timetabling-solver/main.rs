mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use log::error;
use log::info;
use pumpkin_core::convert_case::Case;
use pumpkin_core::statistics::configure_statistic_logging;
use result::SolverError;
use result::SolverResult;
use timetabling_solver::domain::TimetablingProblem;
use timetabling_solver::enumeration::EnumerationController;
use timetabling_solver::enumeration::ReportedOrdinals;
use timetabling_solver::enumeration::RunSummary;
use timetabling_solver::instance::enumeration_limits;
use timetabling_solver::instance::reported_ordinals;
use timetabling_solver::reporting::CsvReporter;
use timetabling_solver::reporting::TextReporter;
use timetabling_solver::rostering::ShiftRosteringProblem;
use timetabling_solver::solve_roster;
use timetabling_solver::solve_timetable;
use timetabling_solver::timetabling::BuildOptions;
use timetabling_solver::timetabling_format::Instance;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve, given as a TOML file with either `kind = "timetabling"` or
    /// `kind = "rostering"`.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Write the reported solutions to this file as comma-separated records instead of printing
    /// them to stdout.
    ///
    /// The file is truncated when the run starts.
    #[arg(long, verbatim_doc_comment)]
    output: Option<PathBuf>,

    /// The ordinals of the solutions which are reported, e.g. `--solutions 1,2,100`.
    ///
    /// Overrides the ordinals given in the instance file. If neither is given, the solutions
    /// 1, 2, 100, 1000, 5000, 50000, 100000 and 2000000 are reported.
    #[arg(long, value_delimiter = ',', verbatim_doc_comment)]
    solutions: Option<Vec<u64>>,

    /// Report every solution which is found.
    ///
    /// Possible values: bool
    #[arg(long = "all-solutions", conflicts_with = "solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// Stop after this many solutions have been found.
    ///
    /// Possible values: u64
    #[arg(long = "max-solutions", verbatim_doc_comment)]
    max_solutions: Option<u64>,

    /// The time limit in milliseconds. When it expires, the run stops with the solutions found so
    /// far.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Require every (course, subject) pair to be taught by a single teacher, even if the
    /// instance does not ask for it. Ignored for rostering instances.
    ///
    /// Possible values: bool
    #[arg(long = "teacher-consistency", verbatim_doc_comment)]
    teacher_consistency: bool,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics at the end of the run.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%% stat:", Some("%% end"), Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    let instance = Instance::read(&args.instance_path).map_err(SolverError::timetabling)?;
    info!("Read instance {}", args.instance_path.display());

    let run_options = instance.run_options();
    let ordinals = if args.all_solutions {
        ReportedOrdinals::every()
    } else if let Some(solutions) = &args.solutions {
        ReportedOrdinals::only(solutions.iter().copied())
    } else {
        reported_ordinals(run_options)
    };

    let mut limits = enumeration_limits(run_options);
    if args.max_solutions.is_some() {
        limits.max_solutions = args.max_solutions;
    }
    if let Some(time_limit) = args.time_limit {
        limits.time_limit = Some(Duration::from_millis(time_limit));
    }

    let controller = EnumerationController::new(ordinals)
        .with_limits(limits)
        .with_interrupt(os_signal_termination::install()?);

    let run_label = run_label(&args.instance_path);
    let output = args.output.as_deref();

    let summary = match &instance {
        Instance::Timetabling(timetabling) => {
            let problem =
                TimetablingProblem::try_from(timetabling).map_err(SolverError::timetabling)?;
            let mut options = BuildOptions::from(timetabling);
            options.teacher_consistency |= args.teacher_consistency;

            match output {
                Some(path) => solve_timetable(
                    &problem,
                    options,
                    &controller,
                    &mut CsvReporter::create(path, &run_label)?,
                )?,
                None => solve_timetable(
                    &problem,
                    options,
                    &controller,
                    &mut TextReporter::new(std::io::stdout()),
                )?,
            }
        }
        Instance::Rostering(rostering) => {
            let problem =
                ShiftRosteringProblem::try_from(rostering).map_err(SolverError::timetabling)?;

            match output {
                Some(path) => solve_roster(
                    &problem,
                    &controller,
                    &mut CsvReporter::create(path, &run_label)?,
                )?,
                None => solve_roster(
                    &problem,
                    &controller,
                    &mut TextReporter::new(std::io::stdout()),
                )?,
            }
        }
    };

    log_summary(&summary);

    Ok(())
}

fn run_label(instance_path: &Path) -> String {
    instance_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| instance_path.display().to_string())
}

fn log_summary(summary: &RunSummary) {
    info!(
        "Finished with status {} after {} ms",
        summary.status,
        summary.statistics.wall_time.as_millis()
    );
}
