use crate::error::QuicklistError;

pub type QuicklistResult<T> = Result<T, QuicklistError>;
