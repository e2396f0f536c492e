/// Which of the two mutually exclusive K4 result fields a sale produces.
/// A break-even sale (profit/loss of exactly 0) is reported as a profit,
/// matching how the tax form is filled in by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Profit(u64),
    Loss(u64),
}

impl From<i64> for Outcome {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Outcome::Profit(value as u64)
        } else {
            Outcome::Loss(value.unsigned_abs())
        }
    }
}

/// One sale of a security, as declared on the K4 form.
/// Quantity, sales price and cost basis are carried as the literal text from
/// the CSV; the tax authority's own checks apply, not ours.
#[derive(Debug, PartialEq)]
pub struct Gain {
    pub designation: String,
    pub quantity: String,
    pub sales_price: String,
    pub cost_basis: String,
    pub outcome: Outcome,
}
