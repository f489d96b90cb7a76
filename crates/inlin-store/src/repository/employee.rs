//! # Employee Repository
//!
//! HR records created from the "add employee" form.

use inlin_core::{Employee, NewEmployee};

use super::EmployeeRepository;
use crate::error::StoreResult;

impl EmployeeRepository {
    /// Appends a new `Active` employee.
    ///
    /// ## Errors
    /// - `Core(Validation)` for blank fields or a malformed join date;
    ///   the table and its id sequence are left untouched
    pub fn create(&mut self, form: NewEmployee) -> StoreResult<Employee> {
        self.insert_with(|id| form.into_employee(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use inlin_core::EmploymentStatus;

    fn form(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            position: "QA Engineer".to_string(),
            department: "IT".to_string(),
            join_date: "2025-06-02".to_string(),
        }
    }

    #[test]
    fn test_create_appends_active_employee() {
        let mut repo = EmployeeRepository::from_rows(seed::employees());
        let before = repo.len();

        let created = repo.create(form("Test User")).unwrap();

        assert_eq!(repo.len(), before + 1);
        assert_eq!(created.status, EmploymentStatus::Active);
        assert_eq!(repo.list().last(), Some(&created));
    }

    #[test]
    fn test_create_issues_fresh_id_after_delete() {
        let mut repo = EmployeeRepository::from_rows(seed::employees());

        assert!(repo.delete(2).is_some());
        let created = repo.create(form("Replacement")).unwrap();

        assert_eq!(created.id, 5);
        let mut ids: Vec<_> = repo.list().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), repo.len());
    }

    #[test]
    fn test_invalid_form_changes_nothing() {
        let mut repo = EmployeeRepository::from_rows(seed::employees());

        let mut bad = form("");
        bad.join_date = "yesterday".to_string();
        assert!(repo.create(bad).is_err());

        assert_eq!(repo.len(), 4);
        assert_eq!(repo.create(form("Next")).unwrap().id, 5);
    }

    #[test]
    fn test_delete_twice_is_a_no_op() {
        let mut repo = EmployeeRepository::from_rows(seed::employees());

        assert!(repo.delete(3).is_some());
        let after_first = repo.list().to_vec();
        assert!(repo.delete(3).is_none());
        assert_eq!(repo.list(), after_first.as_slice());
    }
}
