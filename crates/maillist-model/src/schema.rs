//! The fixed column set of the patient/purchase export and its mailing-list
//! counterpart. Unknown extra columns are not listed here; they pass through
//! the pipeline untouched.

/// Identity column on input. Filtering and deduplication key off this column.
pub const EMAIL_SOURCE: &str = "EmailPaciente";

/// Identity column after renaming.
pub const EMAIL_OUTPUT: &str = "EmailAddress";

/// Full display name on input.
pub const NAME_SOURCE: &str = "Paciente";

/// Full display name after renaming.
pub const NAME_OUTPUT: &str = "Name";

/// Brand-of-interest on input.
pub const BRAND_SOURCE: &str = "Marca";

/// Brand-of-interest after renaming.
pub const BRAND_OUTPUT: &str = "InterestBrand";

/// Quote date on input. The value passes through as opaque text.
pub const DATE_SOURCE: &str = "DataOrcamento";

/// Quote date after renaming.
pub const DATE_OUTPUT: &str = "Date";

/// Derived first-name column.
pub const FIRST_NAME_COLUMN: &str = "FirstName";

/// The derived column is forced into this position regardless of where the
/// name column sits.
pub const FIRST_NAME_POSITION: usize = 1;

/// Purchase bookkeeping columns removed from the extract when present.
pub const PRUNED_COLUMNS: [&str; 14] = [
    "DiaCompra",
    "MesCompra",
    "AnoCompra",
    "CPF",
    "TelCelPaciente",
    "DataNascimento",
    "CidadePaciente",
    "EndPaciente",
    "EstadoPaciente",
    "Unidade",
    "Procedimento Grupo",
    "Procedimento",
    "Origem",
    "ValorCompra",
];

/// Literal prefixes marking placeholder addresses. An email is invalid when
/// its lower-cased value starts with any of these.
pub const BLOCKED_EMAIL_PREFIXES: [&str; 12] = [
    "cliente", "nao", "teste", "ooo", "aaa", "sss", "semem", "pacie", "0@", "00@", "000@", "0000@",
];

/// Source-to-output column renames, applied after filtering and dedupe.
pub const RENAMED_COLUMNS: [(&str, &str); 4] = [
    (NAME_SOURCE, NAME_OUTPUT),
    (EMAIL_SOURCE, EMAIL_OUTPUT),
    (BRAND_SOURCE, BRAND_OUTPUT),
    (DATE_SOURCE, DATE_OUTPUT),
];
