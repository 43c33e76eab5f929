pub mod cpf_cnpj;
pub mod error;
pub mod i18n;
pub mod id;
