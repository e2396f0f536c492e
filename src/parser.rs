use serde::Deserialize;

use crate::{
    error::Error,
    gain::{Gain, Outcome},
};

// Column names are the Swedish headers of the broker export, treated as
// opaque keys ("Försjälningspris" is misspelled in the source data too).
#[derive(Deserialize, Debug, PartialEq)]
struct ParsedGain {
    #[serde(rename = "Beteckning")]
    designation: String,
    #[serde(rename = "Antal")]
    quantity: String,
    #[serde(rename = "Försjälningspris")]
    sales_price: String,
    #[serde(rename = "Omkostnadsbelopp")]
    cost_basis: String,
    #[serde(rename = "Vinst/Förlust")]
    profit_loss: String,
}

pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<Gain, Error>>
where
    R: std::io::Read,
{
    rdr.into_deserialize::<ParsedGain>().map(|row| {
        let row = row.map_err(|e| Error::ParsingFailure(e.to_string()))?;

        // The intermediate representation keeps every declared field as the
        // literal CSV text; only the profit/loss field is interpreted, as it
        // decides which result tag the record gets.
        let outcome = match row.profit_loss.parse::<i64>() {
            Ok(value) => Outcome::from(value),
            Err(_) => return Err(Error::MalformedProfitLoss(row.profit_loss)),
        };

        Ok(Gain {
            designation: row.designation,
            quantity: row.quantity,
            sales_price: row.sales_price,
            cost_basis: row.cost_basis,
            outcome,
        })
    })
}
