use std::fmt::Formatter;

use serde::Deserialize;

use crate::cep::Cep;

pub const LABEL: &str = "Via CEP";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViaCepAddress {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

pub fn url(base: &str, cep: &Cep) -> String {
    format!("{}/{}/json", base, cep.as_str())
}

impl std::fmt::Display for ViaCepAddress {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {} {} {} {} {} {}}}",
            self.cep,
            self.logradouro,
            self.complemento,
            self.bairro,
            self.localidade,
            self.uf,
            self.ibge,
            self.gia,
            self.ddd,
            self.siafi
        )
    }
}
