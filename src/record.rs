use std::fmt::Write;

use crate::gain::{Gain, Outcome};

/// Capital-gains form this converter fills in.
pub const FORM_ID: &str = "K4-2023P4";

// Field codes on the K4 blankett.
const TAG_QUANTITY: u16 = 3100;
const TAG_DESIGNATION: u16 = 3101;
const TAG_SALES_PRICE: u16 = 3102;
const TAG_COST_BASIS: u16 = 3103;
const TAG_PROFIT: u16 = 3104;
const TAG_LOSS: u16 = 3105;
const TAG_RECORD_INDEX: u16 = 7014;

/// Filer identification repeated at the top of every record in a run.
/// Date (`YYYYMMDD`) and time (`HHMMSS`) are plain strings supplied by the
/// caller; rendering never consults the clock, so the same inputs always
/// produce the same document.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub identity: String,
    pub name: String,
    pub date: String,
    pub time: String,
}

/// Render one gain as an SRU record block, `index` being its 1-based
/// position in the file. Exactly one of tag 3104 (profit) or 3105 (loss)
/// appears, chosen when the row was parsed.
pub fn render(header: &Header, gain: &Gain, index: usize) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "#BLANKETT {FORM_ID}");
    let _ = writeln!(
        s,
        "#IDENTITET {} {} {}",
        header.identity, header.date, header.time
    );
    let _ = writeln!(s, "#NAMN {}", header.name);
    let _ = writeln!(s, "#UPPGIFT {TAG_QUANTITY} {}", gain.quantity);
    let _ = writeln!(s, "#UPPGIFT {TAG_DESIGNATION} {}", gain.designation);
    let _ = writeln!(s, "#UPPGIFT {TAG_SALES_PRICE} {}", gain.sales_price);
    let _ = writeln!(s, "#UPPGIFT {TAG_COST_BASIS} {}", gain.cost_basis);
    let _ = match gain.outcome {
        Outcome::Profit(value) => writeln!(s, "#UPPGIFT {TAG_PROFIT} {value}"),
        Outcome::Loss(value) => writeln!(s, "#UPPGIFT {TAG_LOSS} {value}"),
    };
    let _ = writeln!(s, "#UPPGIFT {TAG_RECORD_INDEX} {index}");
    let _ = writeln!(s, "#BLANKETTSLUT");
    s
}

#[cfg(test)]
mod tests {
    use super::{render, Header};
    use crate::gain::{Gain, Outcome};

    fn header() -> Header {
        Header {
            identity: "123123123123".to_string(),
            name: "Jane Doe".to_string(),
            date: "20240329".to_string(),
            time: "210540".to_string(),
        }
    }

    fn gain(outcome: Outcome) -> Gain {
        Gain {
            designation: "PG".to_string(),
            quantity: "10".to_string(),
            sales_price: "1000".to_string(),
            cost_basis: "10".to_string(),
            outcome,
        }
    }

    #[test]
    fn profit_record() {
        assert_eq!(
            render(&header(), &gain(Outcome::Profit(990)), 1),
            "#BLANKETT K4-2023P4\n\
             #IDENTITET 123123123123 20240329 210540\n\
             #NAMN Jane Doe\n\
             #UPPGIFT 3100 10\n\
             #UPPGIFT 3101 PG\n\
             #UPPGIFT 3102 1000\n\
             #UPPGIFT 3103 10\n\
             #UPPGIFT 3104 990\n\
             #UPPGIFT 7014 1\n\
             #BLANKETTSLUT\n"
        );
    }

    #[test]
    fn loss_record_has_loss_tag_only() {
        let block = render(&header(), &gain(Outcome::Loss(20)), 1);
        assert!(block.contains("#UPPGIFT 3105 20\n"));
        assert!(!block.contains("#UPPGIFT 3104"));
    }

    #[test]
    fn zero_profit_keeps_profit_tag() {
        let block = render(&header(), &gain(Outcome::Profit(0)), 1);
        assert!(block.contains("#UPPGIFT 3104 0\n"));
        assert!(!block.contains("#UPPGIFT 3105"));
    }

    #[test]
    fn index_is_rendered_under_7014() {
        let block = render(&header(), &gain(Outcome::Profit(1)), 42);
        assert!(block.contains("#UPPGIFT 7014 42\n"));
    }
}
