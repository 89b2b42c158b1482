use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::employee::Employee;

/// Ordered in-memory collection of employees. Insertion order is preserved
/// and lookups are linear scans; all state is lost on process restart.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
}

impl EmployeeStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.records.iter()
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|employee| employee.id == id)
    }

    /// Index must come from a `position` call under the same lock guard.
    pub fn get(&self, index: usize) -> &Employee {
        &self.records[index]
    }

    pub fn insert(&mut self, employee: Employee) {
        self.records.push(employee);
    }

    pub fn extend(&mut self, batch: Vec<Employee>) {
        self.records.extend(batch);
    }

    pub fn replace(&mut self, index: usize, employee: Employee) {
        self.records[index] = employee;
    }

    pub fn remove(&mut self, index: usize) -> Employee {
        self.records.remove(index)
    }

    /// Empties the store, returning how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }
}

/// Department names, seeded with the default set on startup.
#[derive(Debug)]
pub struct DepartmentStore {
    names: Vec<String>,
}

impl Default for DepartmentStore {
    fn default() -> Self {
        DepartmentStore {
            names: vec![
                "Engineering".to_string(),
                "Marketing".to_string(),
                "Sales".to_string(),
                "HR".to_string(),
            ],
        }
    }
}

impl DepartmentStore {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    pub fn insert(&mut self, name: String) {
        self.names.push(name);
    }

    pub fn remove(&mut self, index: usize) -> String {
        self.names.remove(index)
    }
}

/// Shared application state. actix serves requests from multiple workers,
/// so every store access goes through a mutex to keep mutations serialized.
pub struct AppState {
    employees: Mutex<EmployeeStore>,
    departments: Mutex<DepartmentStore>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            employees: Mutex::new(EmployeeStore::default()),
            departments: Mutex::new(DepartmentStore::default()),
        }
    }

    pub fn employees(&self) -> MutexGuard<'_, EmployeeStore> {
        self.employees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn departments(&self) -> MutexGuard<'_, DepartmentStore> {
        self.departments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
