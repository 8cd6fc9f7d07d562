/// Form bookkeeping for the add, edit, and delete flows
///
/// Field updates are typed per field instead of merged by name, so a
/// message can only ever touch a field the record actually has. The
/// same `Field` values are routed to the draft or the selected record
/// depending on which form emitted them.

use super::data::Student;

/// One typed edit to a record field
#[derive(Debug, Clone)]
pub enum Field {
    Name(String),
    Email(String),
    Address(String),
    Phone(String),
    Active(bool),
}

/// Apply a single field edit to a record
pub fn apply(student: &mut Student, field: Field) {
    match field {
        Field::Name(value) => student.student_name = value,
        Field::Email(value) => student.email = value,
        Field::Address(value) => student.address = value,
        Field::Phone(value) => student.phone = value,
        Field::Active(value) => student.status = value,
    }
}

/// Visibility flags for the three modals.
///
/// The flags are independent; the UI affordances only ever open one at
/// a time, but nothing here enforces mutual exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modals {
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

/// Per-operation in-flight flags.
///
/// While a flag is set the matching submit affordance is disabled, so a
/// form cannot be submitted twice for the same operation. Distinct
/// operations may still overlap; the last response to arrive wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pending {
    pub fetch: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_routes_each_field() {
        let mut student = Student::draft();

        apply(&mut student, Field::Name("Ada".into()));
        apply(&mut student, Field::Email("ada@example.com".into()));
        apply(&mut student, Field::Address("12 Analytical Row".into()));
        apply(&mut student, Field::Phone("555-0100".into()));
        apply(&mut student, Field::Active(false));

        assert_eq!(student.student_name, "Ada");
        assert_eq!(student.email, "ada@example.com");
        assert_eq!(student.address, "12 Analytical Row");
        assert_eq!(student.phone, "555-0100");
        assert!(!student.status);
    }

    #[test]
    fn test_apply_leaves_identity_untouched() {
        let mut student = Student::draft();
        student.id = 42;
        let created_at = student.created_at.clone();

        apply(&mut student, Field::Name("Ada".into()));

        assert_eq!(student.id, 42);
        assert_eq!(student.created_at, created_at);
    }

    #[test]
    fn test_flags_start_cleared() {
        assert_eq!(Modals::default(), Modals { add: false, edit: false, delete: false });
        let pending = Pending::default();
        assert!(!pending.fetch && !pending.create && !pending.update && !pending.delete);
    }
}
