// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "es";
pub const SUPPORTED_LANGS: &[&str] = &["es", "en", "pt"];

type Catalog = HashMap<&'static str, &'static str>;

/// Catálogos de mensagens por idioma. As mensagens podem ter marcadores
/// posicionais `{0}`, `{1}`...
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<&'static str, Catalog>,
}

impl Default for I18nStore {
    fn default() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert("es", spanish());
        catalogs.insert("en", english());
        catalogs.insert("pt", portuguese());
        Self { catalogs }
    }
}

impl I18nStore {
    /// Busca a mensagem no idioma pedido, cai no espanhol e, por fim, na própria chave.
    pub fn translate(&self, lang: &str, key: &str, args: &[&str]) -> String {
        let template = self.template(lang, key).unwrap_or(key);

        let mut message = template.to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }

    /// Como `translate`, mas devolve None quando a chave não existe em catálogo nenhum.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<String> {
        self.template(lang, key).map(str::to_string)
    }

    fn template(&self, lang: &str, key: &str) -> Option<&'static str> {
        self.catalogs
            .get(lang)
            .and_then(|c| c.get(key))
            .or_else(|| self.catalogs.get(DEFAULT_LANG).and_then(|c| c.get(key)))
            .copied()
    }
}

fn spanish() -> Catalog {
    HashMap::from([
        ("validation_error", "Uno o más campos son inválidos."),
        ("invalid_credentials", "Correo electrónico o contraseña incorrectos."),
        ("invalid_token", "Token de autenticación inválido o ausente."),
        ("inactive_user", "Usuario inactivo."),
        ("insufficient_role", "Se requieren permisos de administrador para esta operación."),
        ("forbidden_other_user", "No tienes permiso para acceder a este usuario."),
        ("forbidden_admin_fields", "Solo un administrador puede cambiar el rol, el estado o la comisión."),
        ("not_found", "{0} no encontrado."),
        ("duplicate_record", "Ya existe un registro con ese {0}."),
        ("reference_not_found", "{0} indicado no existe."),
        ("record_in_use", "No se puede eliminar: {0} tiene registros asociados."),
        ("invalid_coverage_period", "La fecha de fin de vigencia no puede ser anterior a la de inicio."),
        ("admin_already_configured", "Ya existe un usuario administrador."),
        ("cannot_delete_self", "No puedes eliminar tu propio usuario."),
        ("internal_error", "Ocurrió un error inesperado."),
        ("cannot_change_own_access", "Un administrador no puede desactivarse ni quitarse el rol de administrador."),
        ("invalid_body", "El cuerpo de la solicitud es inválido o está incompleto."),
        ("validation.required", "Campo obligatorio."),
        ("validation.invalid_name", "Nombre inválido."),
        ("validation.invalid_email", "Correo electrónico inválido."),
        ("validation.too_long", "Texto demasiado largo."),
        ("validation.invalid_length", "Longitud inválida."),
        ("validation.password_too_short", "La contraseña debe tener al menos 8 caracteres."),
        ("validation.must_be_positive", "Debe ser mayor que cero."),
        ("validation.must_not_be_negative", "No puede ser negativo."),
        ("validation.invalid_percentage", "Debe estar entre 0 y 100."),
        ("validation.invalid_phone", "Teléfono inválido."),
        ("validation.invalid_skip", "El desplazamiento no puede ser negativo."),
        ("validation.invalid_limit", "El límite debe estar entre 1 y 1000."),
        ("validation.coverage_to_before_coverage_from", "El fin de vigencia es anterior al inicio."),
        ("resource.user", "Usuario"),
        ("resource.broker", "Corredor"),
        ("resource.client", "Cliente"),
        ("resource.insurance_type", "Tipo de seguro"),
        ("resource.movement", "Movimiento"),
        ("field.email", "correo electrónico"),
        ("field.document", "documento"),
        ("field.broker_number", "número de corredor"),
        ("field.client_number", "número de cliente"),
        ("field.insurer_code", "aseguradora y código"),
        ("field.policy_endorsement", "póliza y endoso"),
    ])
}

fn english() -> Catalog {
    HashMap::from([
        ("validation_error", "One or more fields are invalid."),
        ("invalid_credentials", "Incorrect email or password."),
        ("invalid_token", "Invalid or missing authentication token."),
        ("inactive_user", "Inactive user."),
        ("insufficient_role", "Administrator privileges are required for this operation."),
        ("forbidden_other_user", "You are not allowed to access this user."),
        ("forbidden_admin_fields", "Only an administrator can change role, status or commission."),
        ("not_found", "{0} not found."),
        ("duplicate_record", "A record with that {0} already exists."),
        ("reference_not_found", "The given {0} does not exist."),
        ("record_in_use", "Cannot delete: {0} has related records."),
        ("invalid_coverage_period", "Coverage end date cannot be before its start date."),
        ("admin_already_configured", "An administrator user already exists."),
        ("cannot_delete_self", "You cannot delete your own user."),
        ("internal_error", "An unexpected error occurred."),
        ("cannot_change_own_access", "An administrator cannot deactivate or demote themselves."),
        ("invalid_body", "The request body is malformed or incomplete."),
        ("validation.required", "This field is required."),
        ("validation.invalid_name", "Invalid name."),
        ("validation.invalid_email", "Invalid email address."),
        ("validation.too_long", "Text is too long."),
        ("validation.invalid_length", "Invalid length."),
        ("validation.password_too_short", "Password must have at least 8 characters."),
        ("validation.must_be_positive", "Must be greater than zero."),
        ("validation.must_not_be_negative", "Cannot be negative."),
        ("validation.invalid_percentage", "Must be between 0 and 100."),
        ("validation.invalid_phone", "Invalid phone number."),
        ("validation.invalid_skip", "Skip cannot be negative."),
        ("validation.invalid_limit", "Limit must be between 1 and 1000."),
        ("validation.coverage_to_before_coverage_from", "Coverage end is before its start."),
        ("resource.user", "User"),
        ("resource.broker", "Broker"),
        ("resource.client", "Client"),
        ("resource.insurance_type", "Insurance type"),
        ("resource.movement", "Movement"),
        ("field.email", "email"),
        ("field.document", "document"),
        ("field.broker_number", "broker number"),
        ("field.client_number", "client number"),
        ("field.insurer_code", "insurer and code"),
        ("field.policy_endorsement", "policy and endorsement"),
    ])
}

fn portuguese() -> Catalog {
    HashMap::from([
        ("validation_error", "Um ou mais campos são inválidos."),
        ("invalid_credentials", "E-mail ou senha inválidos."),
        ("invalid_token", "Token de autenticação inválido ou ausente."),
        ("inactive_user", "Usuário inativo."),
        ("insufficient_role", "É necessário ser administrador para esta operação."),
        ("forbidden_other_user", "Você não tem permissão para acessar este usuário."),
        ("forbidden_admin_fields", "Somente um administrador pode alterar cargo, status ou comissão."),
        ("not_found", "{0} não encontrado."),
        ("duplicate_record", "Já existe um registro com esse {0}."),
        ("reference_not_found", "{0} informado não existe."),
        ("record_in_use", "Não é possível excluir: {0} possui registros vinculados."),
        ("invalid_coverage_period", "A data final da vigência não pode ser anterior à inicial."),
        ("admin_already_configured", "Já existe um usuário administrador."),
        ("cannot_delete_self", "Você não pode excluir o próprio usuário."),
        ("internal_error", "Ocorreu um erro inesperado."),
        ("cannot_change_own_access", "Um administrador não pode se desativar nem se rebaixar."),
        ("invalid_body", "O corpo da requisição é inválido ou está incompleto."),
        ("validation.required", "Campo obrigatório."),
        ("validation.invalid_name", "Nome inválido."),
        ("validation.invalid_email", "E-mail inválido."),
        ("validation.too_long", "Texto longo demais."),
        ("validation.invalid_length", "Tamanho inválido."),
        ("validation.password_too_short", "A senha deve ter pelo menos 8 caracteres."),
        ("validation.must_be_positive", "Deve ser maior que zero."),
        ("validation.must_not_be_negative", "Não pode ser negativo."),
        ("validation.invalid_percentage", "Deve estar entre 0 e 100."),
        ("validation.invalid_phone", "Telefone inválido."),
        ("validation.invalid_skip", "O deslocamento não pode ser negativo."),
        ("validation.invalid_limit", "O limite deve estar entre 1 e 1000."),
        ("validation.coverage_to_before_coverage_from", "O fim da vigência é anterior ao início."),
        ("resource.user", "Usuário"),
        ("resource.broker", "Corretor"),
        ("resource.client", "Cliente"),
        ("resource.insurance_type", "Tipo de seguro"),
        ("resource.movement", "Movimento"),
        ("field.email", "e-mail"),
        ("field.document", "documento"),
        ("field.broker_number", "número de corretor"),
        ("field.client_number", "número de cliente"),
        ("field.insurer_code", "seguradora e código"),
        ("field.policy_endorsement", "apólice e endosso"),
    ])
}
