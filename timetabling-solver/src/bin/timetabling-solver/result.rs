use thiserror::Error;
use timetabling_solver::TimetablingError;

pub(crate) type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub(crate) enum SolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    Timetabling(#[from] TimetablingError),
}

impl SolverError {
    pub(crate) fn timetabling(error: impl Into<TimetablingError>) -> Self {
        Self::Timetabling(error.into())
    }
}
