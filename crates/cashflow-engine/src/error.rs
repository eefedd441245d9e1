use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectionError {
    #[error("non-finite {field} ({value}) on {date}; check the budget's numeric inputs")]
    NonFiniteValue {
        date: NaiveDate,
        field: &'static str,
        value: f64,
    },
    #[error("horizon of {months} month(s) from {today} is not a representable date")]
    HorizonOutOfRange { today: NaiveDate, months: u32 },
}
