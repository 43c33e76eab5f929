// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "pt";

// Idiomas com tradução no catálogo, na ordem das colunas.
pub const SUPPORTED_LANGS: &[&str] = &["pt", "en"];

// (chave, português, inglês)
const CATALOG: &[(&str, &str, &str)] = &[
    // --- Motivos ---
    ("validation.invalid_fields", "Um ou mais campos são inválidos", "One or more fields are invalid"),
    ("producer.invalid_document", "CPF/CNPJ inválido", "Invalid CPF/CNPJ"),
    ("request.invalid_id", "O id informado não é numérico", "The given id is not numeric"),
    (
        "farm.invalid_area",
        "A soma das áreas agricultável e de vegetação não pode ultrapassar a área total da fazenda",
        "Arable plus vegetation area cannot exceed the farm's total area",
    ),
    ("producer.not_found", "Produtor não encontrado", "Producer not found"),
    ("farm.not_found", "Fazenda não encontrada", "Farm not found"),
    (
        "producer.already_exists",
        "Produtor já cadastrado com esse CPF/CNPJ",
        "A producer with this CPF/CNPJ is already registered",
    ),
    ("server.unexpected", "Ocorreu um erro inesperado", "An unexpected error occurred"),
    ("farm.deleted", "Fazenda deletada com sucesso", "Farm deleted successfully"),
    // --- Operações (prefixo das mensagens de erro) ---
    ("action.create_producer", "Erro ao criar o produtor", "Failed to create producer"),
    ("action.list_producers", "Erro ao buscar os produtores", "Failed to list producers"),
    ("action.find_producer", "Erro ao buscar o produtor", "Failed to fetch producer"),
    ("action.update_producer", "Erro ao atualizar o produtor", "Failed to update producer"),
    ("action.delete_producer", "Erro ao deletar o produtor", "Failed to delete producer"),
    ("action.dashboard", "Erro ao carregar o dashboard", "Failed to load dashboard"),
    ("action.create_farm", "Erro ao criar a fazenda", "Failed to create farm"),
    ("action.list_farms", "Erro ao buscar as fazendas", "Failed to list farms"),
    ("action.find_farm", "Erro ao buscar a fazenda", "Failed to fetch farm"),
    ("action.update_farm", "Erro ao atualizar a fazenda", "Failed to update farm"),
    ("action.delete_farm", "Erro ao deletar a fazenda", "Failed to delete farm"),
];

/// Catálogo de mensagens por idioma. Idioma desconhecido cai no português;
/// chave desconhecida é devolvida como está.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut pt = HashMap::new();
        let mut en = HashMap::new();

        for (key, pt_text, en_text) in CATALOG {
            pt.insert(*key, *pt_text);
            en.insert(*key, *en_text);
        }

        let mut messages = HashMap::new();
        messages.insert("pt", pt);
        messages.insert("en", en);

        Self { messages }
    }

    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.messages
            .get(lang)
            .or_else(|| self.messages.get(DEFAULT_LANG))
            .and_then(|table| table.get(key))
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
