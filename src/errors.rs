//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! The check-in and login variants carry the Portuguese texts shown to
//! students and professors; infrastructure variants stay in English.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Check-in submission
    // ---------------------------
    #[error("Registro de presença indisponível no momento. Procure o professor.")]
    CheckinDisabled,

    #[error("Por favor, insira o nome completo (pelo menos duas palavras).")]
    InvalidName,

    #[error("O número de matrícula é obrigatório.")]
    MissingEnrollmentId,

    #[error("Já existe um registro para esta matrícula hoje às {0}.")]
    DuplicateToday(String),

    #[error("Não foi possível registrar agora. Tente novamente ou contate o professor. ({0})")]
    Persistence(String),

    // ---------------------------
    // Professor panel
    // ---------------------------
    #[error("Credenciais inválidas. Tente novamente.")]
    InvalidCredentials,

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored value under '{0}' is corrupted and was left untouched")]
    CorruptStore(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period selector: {0} (use YYYY, YYYY-MM or YYYY-MM-DD)")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
