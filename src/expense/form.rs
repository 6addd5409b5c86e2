//! Validation of the expense fields sent by the client on create and replace.

use serde::{Deserialize, Serialize};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Error, amount::Amount};

use super::{
    core::{Expense, ExpenseBuilder},
    query::parse_date,
};

/// The minimum number of characters in an expense title.
const MIN_TITLE_LENGTH: usize = 2;

/// The JSON body for creating or replacing an expense.
///
/// Every field is optional so that a missing field is reported as a
/// validation error rather than a body parsing error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseData {
    /// What was paid for, at least two characters long.
    pub title: Option<String>,
    /// How much was paid in major units, must not be negative.
    pub amount: Option<f64>,
    /// The event the expense belongs to.
    pub event: Option<String>,
    /// Who paid.
    pub paid_by: Option<String>,
    /// When the payment was made as "YYYY-MM-DD" or an RFC 3339 timestamp.
    /// Defaults to today.
    pub date: Option<String>,
    /// Free text notes.
    pub notes: Option<String>,
}

impl ExpenseData {
    /// Check the fields and convert them into a full expense record.
    ///
    /// Text fields are trimmed. `today` is used when no date was given.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingField] if the title, amount, event or payer is missing,
    /// - [Error::TitleTooShort] if the title has fewer than two characters,
    /// - [Error::InvalidAmount] if the amount is negative, too large or not finite,
    /// - [Error::EmptyField] if the event or payer is blank,
    /// - or [Error::InvalidDate] if the date cannot be parsed.
    pub fn validate(self, today: Date) -> Result<ExpenseBuilder, Error> {
        let title = self.title.ok_or(Error::MissingField("title"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let event = self.event.ok_or(Error::MissingField("event"))?;
        let paid_by = self.paid_by.ok_or(Error::MissingField("paidBy"))?;

        let title = title.trim();
        if title.graphemes(true).count() < MIN_TITLE_LENGTH {
            return Err(Error::TitleTooShort);
        }

        let amount = Amount::try_from(amount)?;
        let event = non_blank(&event, "event")?;
        let paid_by = non_blank(&paid_by, "paidBy")?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(text) => parse_date(text).ok_or_else(|| Error::InvalidDate(text.to_owned()))?,
        };

        let notes = self.notes.unwrap_or_default();

        Ok(Expense::build(title, amount, event, paid_by, date).notes(notes.trim()))
    }
}

fn non_blank<'a>(text: &'a str, field_name: &'static str) -> Result<&'a str, Error> {
    let text = text.trim();

    if text.is_empty() {
        Err(Error::EmptyField(field_name))
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{Error, amount::Amount, expense::ExpenseData};

    fn valid_data() -> ExpenseData {
        ExpenseData {
            title: Some("  Venue Booking ".to_owned()),
            amount: Some(25_000.0),
            event: Some("Chheka".to_owned()),
            paid_by: Some("Ajeet (Uncle)".to_owned()),
            date: Some("2026-02-10".to_owned()),
            notes: Some("Garden venue for engagement".to_owned()),
        }
    }

    #[test]
    fn accepts_valid_data() {
        let builder = valid_data().validate(date!(2026 - 10 - 19)).unwrap();

        assert_eq!(builder.title, "Venue Booking");
        assert_eq!(builder.amount, Amount::from_major_units(25_000));
        assert_eq!(builder.event, "Chheka");
        assert_eq!(builder.paid_by, "Ajeet (Uncle)");
        assert_eq!(builder.date, date!(2026 - 02 - 10));
        assert_eq!(builder.notes, "Garden venue for engagement");
    }

    #[test]
    fn reports_first_missing_field() {
        let data = ExpenseData {
            amount: None,
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)),
            Err(Error::MissingField("amount"))
        );
    }

    #[test]
    fn rejects_single_character_title() {
        let data = ExpenseData {
            title: Some(" A ".to_owned()),
            ..valid_data()
        };

        assert_eq!(data.validate(date!(2026 - 10 - 19)), Err(Error::TitleTooShort));
    }

    #[test]
    fn counts_title_length_in_graphemes() {
        // Two emoji made of several code points each.
        let data = ExpenseData {
            title: Some("👰🏽🎉".to_owned()),
            ..valid_data()
        };

        assert!(data.validate(date!(2026 - 10 - 19)).is_ok());

        let data = ExpenseData {
            title: Some("👰🏽".to_owned()),
            ..valid_data()
        };

        assert_eq!(data.validate(date!(2026 - 10 - 19)), Err(Error::TitleTooShort));
    }

    #[test]
    fn accepts_zero_amount() {
        let data = ExpenseData {
            amount: Some(0.0),
            ..valid_data()
        };

        assert_eq!(data.validate(date!(2026 - 10 - 19)).unwrap().amount, Amount::ZERO);
    }

    #[test]
    fn rejects_negative_amount() {
        let data = ExpenseData {
            amount: Some(-1.0),
            ..valid_data()
        };

        assert!(matches!(
            data.validate(date!(2026 - 10 - 19)),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn rejects_amount_above_maximum() {
        let data = ExpenseData {
            amount: Some(5.0e16),
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)),
            Err(Error::InvalidAmount("50000000000000000".to_owned()))
        );
    }

    #[test]
    fn rejects_blank_payer() {
        let data = ExpenseData {
            paid_by: Some("   ".to_owned()),
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)),
            Err(Error::EmptyField("paidBy"))
        );
    }

    #[test]
    fn defaults_to_today_without_date() {
        let data = ExpenseData {
            date: None,
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)).unwrap().date,
            date!(2026 - 10 - 19)
        );
    }

    #[test]
    fn accepts_timestamp_date() {
        let data = ExpenseData {
            date: Some("2026-02-20T18:30:00.000Z".to_owned()),
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)).unwrap().date,
            date!(2026 - 02 - 20)
        );
    }

    #[test]
    fn rejects_malformed_date() {
        let data = ExpenseData {
            date: Some("next tuesday".to_owned()),
            ..valid_data()
        };

        assert_eq!(
            data.validate(date!(2026 - 10 - 19)),
            Err(Error::InvalidDate("next tuesday".to_owned()))
        );
    }

    #[test]
    fn missing_notes_are_empty() {
        let data = ExpenseData {
            notes: None,
            ..valid_data()
        };

        assert_eq!(data.validate(date!(2026 - 10 - 19)).unwrap().notes, "");
    }
}
