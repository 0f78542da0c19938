use ohm_derive::ohm_error;
use std::borrow::Cow;

#[ohm_error]
pub enum TableError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Duplicate color: {name}")]
    Duplicate { name: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_digit(raw: &str) -> Result<u8, TableError> {
    let digit = raw.parse::<u8>().context("digit column")?;
    if digit > 9 {
        return Err("digit out of range".into());
    }
    Ok(digit)
}

fn main() {
    assert!(parse_digit("7").is_ok());

    let err = parse_digit("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (digit column)"));

    let err: Result<(), TableError> = Err(TableError::from(String::from("boom")));
    let err = err.context("loading").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (loading): boom");

    let dup = TableError::Duplicate { name: "red".to_owned() };
    assert_eq!(dup.to_string(), "Duplicate color: red");
}
