//! In-memory backend for tests and embedding.

use super::Backend;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRow {
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, String>,
    log: Vec<AuditRow>,
    reject_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set`/`remove` fail, as a full quota would.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn audit_log(&self) -> &[AuditRow] {
        &self.log
    }

    fn check_writable(&self, key: &str) -> AppResult<()> {
        if self.reject_writes {
            return Err(AppError::Storage(format!("quota exceeded writing '{key}'")));
        }
        Ok(())
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.check_writable(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.check_writable(key)?;
        self.values.remove(key);
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log.push(AuditRow {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
