use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{entities::ReceptionHeader, errors::InvalidReceptionDate};

const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

#[derive(Debug)]
pub(crate) struct ReceptionDateModel(NaiveDate);
impl FromStr for ReceptionDateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s.trim(), format).ok())
            .map(ReceptionDateModel)
            .ok_or_else(|| InvalidReceptionDate::new(s))
    }
}

impl Into<NaiveDate> for ReceptionDateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}

impl ReceptionHeader {
    /// Reception date as a calendar date, if it is in `YYYY-MM-DD` or
    /// `DD.MM.YYYY` form. The raw text in `reception_date` is left untouched.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        ReceptionDateModel::from_str(&self.reception_date)
            .ok()
            .map(Into::into)
    }
}
