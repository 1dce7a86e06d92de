pub use self::brasil_api::BrasilApiAddress;
pub use self::via_cep::ViaCepAddress;

pub mod brasil_api;
pub mod via_cep;
