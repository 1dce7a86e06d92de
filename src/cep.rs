use std::fmt::Formatter;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CEP_FORMAT: Regex = Regex::new(r"^\d{5}-?\d{3}$").expect("Could not create regex");
}

#[derive(Debug, PartialEq)]
pub enum CepError {
    Missing,
    Malformed(String),
}

impl std::fmt::Display for CepError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CepError::Missing => write!(f, "Please provide a CEP as an argument"),
            CepError::Malformed(raw) => {
                write!(f, "Invalid CEP '{}': expected 8 digits (e.g. 01310100 or 01310-100)", raw)
            }
        }
    }
}

/// A validated postal code, always 8 ASCII digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Cep(String);

impl Cep {
    pub fn parse(raw: &str) -> Result<Cep, CepError> {
        let trimmed = raw.trim();
        if !CEP_FORMAT.is_match(trimmed) {
            return Err(CepError::Malformed(raw.to_owned()));
        }
        Ok(Cep(trimmed.replace('-', "")))
    }

    /// Reads the first positional argument, skipping the program name.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cep, CepError> {
        match args.into_iter().nth(1) {
            Some(raw) => Cep::parse(&raw),
            None => Err(CepError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
