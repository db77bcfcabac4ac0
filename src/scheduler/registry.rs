//! Process registry.
//!
//! Long-lived, caller-owned set of process specifications. Runs never
//! mutate it; each run works on a reset snapshot instead.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::validation::{
    validate_process, validate_processes, ValidationError, ValidationErrorKind,
};
use crate::workload;

/// Registered processes, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a batch, reporting every invalid entry.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self, Vec<ValidationError>> {
        validate_processes(&processes)?;
        let mut registry = Self { processes };
        registry.processes.iter_mut().for_each(Process::reset);
        Ok(registry)
    }

    /// Registers a process.
    ///
    /// # Errors
    /// - Empty ID, non-positive burst or negative arrival
    /// - [`ValidationErrorKind::TimeOverflow`] if `arrival + burst` overflows
    /// - [`ValidationErrorKind::DuplicateId`] if the ID is taken
    ///
    /// The registry is unchanged on error.
    pub fn register(&mut self, mut process: Process) -> Result<(), ValidationError> {
        validate_process(&process)?;
        if self.contains(&process.id) {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Process ID already exists: {}", process.id),
            ));
        }
        process.reset();
        debug!(
            "registered process {} (arrival={}, burst={}, priority={})",
            process.id, process.arrival_time, process.burst_time, process.priority
        );
        self.processes.push(process);
        Ok(())
    }

    /// Registers a process from its fields.
    pub fn register_process(
        &mut self,
        id: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) -> Result<(), ValidationError> {
        self.register(Process::new(id, arrival_time, burst_time).with_priority(priority))
    }

    /// Removes a process by ID, returning it.
    pub fn remove_process(&mut self, id: &str) -> Result<Process, ValidationError> {
        let Some(pos) = self.processes.iter().position(|p| p.id == id) else {
            return Err(ValidationError::new(
                ValidationErrorKind::UnknownProcess,
                format!("Process not found: {id}"),
            ));
        };
        debug!("removed process {id}");
        Ok(self.processes.remove(pos))
    }

    /// Removes every process.
    pub fn reset_all(&mut self) {
        debug!("cleared {} processes", self.processes.len());
        self.processes.clear();
    }

    /// Replaces the content with the built-in sample workload.
    pub fn load_sample(&mut self) {
        self.processes = workload::sample_processes();
        debug!("loaded {} sample processes", self.processes.len());
    }

    /// Registered processes, in registration order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Looks up a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Whether a process with this ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
