use std::fmt::Formatter;

use serde::Deserialize;

use crate::cep::Cep;

pub const LABEL: &str = "Brasil API";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrasilApiAddress {
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub service: String,
}

pub fn url(base: &str, cep: &Cep) -> String {
    format!("{}/{}", base, cep.as_str())
}

impl std::fmt::Display for BrasilApiAddress {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {} {}}}",
            self.cep, self.state, self.city, self.neighborhood, self.street, self.service
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BRASIL_API_URL;

    #[test]
    fn test_url() {
        let cep = Cep::parse("01310100").unwrap();
        assert_eq!(
            url(DEFAULT_BRASIL_API_URL, &cep),
            "https://brasilapi.com.br/api/cep/v1/01310100"
        );
    }

    #[test]
    fn test_decode_full_body() {
        let body = r#"{
            "cep": "01310100",
            "state": "SP",
            "city": "São Paulo",
            "neighborhood": "Bela Vista",
            "street": "Avenida Paulista",
            "service": "open-cep",
            "location": { "type": "Point", "coordinates": {} }
        }"#;
        let address: BrasilApiAddress = serde_json::from_str(body).unwrap();
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.service, "open-cep");
        assert_eq!(
            address.to_string(),
            "{01310100 SP São Paulo Bela Vista Avenida Paulista open-cep}"
        );
    }

    #[test]
    fn test_decode_error_document_leaves_fields_empty() {
        let body = r#"{"name": "CepPromiseError", "message": "Todos os serviços de CEP retornaram erro."}"#;
        let address: BrasilApiAddress = serde_json::from_str(body).unwrap();
        assert_eq!(address, BrasilApiAddress::default());
        assert_eq!(address.to_string(), "{     }");
    }
}
