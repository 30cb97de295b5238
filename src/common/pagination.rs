// src/common/pagination.rs

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

fn default_limit() -> i64 {
    100
}

/// Parâmetros comuns das listagens: `?skip=0&limit=100&search=texto`
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Quantos registros pular
    #[serde(default)]
    #[validate(range(min = 0, message = "invalid_skip"))]
    pub skip: i64,

    /// Máximo de registros retornados (1..=1000)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "invalid_limit"))]
    pub limit: i64,

    /// Texto para busca parcial, sem diferenciar maiúsculas
    pub search: Option<String>,
}

impl ListParams {
    /// Padrão para ILIKE (`%termo%`), ou None se a busca estiver vazia.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)))
    }
}

// `%` e `_` digitados pelo usuário devem ser literais
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
