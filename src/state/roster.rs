use super::data::Student;

/// The in-memory roster, mirroring the server's collection.
///
/// The roster is seeded once from the initial fetch and afterwards
/// changed only by reconciling successful mutations: each one appends,
/// replaces, or removes exactly one record. Order is the server's
/// response order; no client-side resort happens.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Replace the whole roster with a freshly fetched collection
    pub fn replace_all(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    /// Append a record the server just created
    pub fn append(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Replace the record whose id matches the server's updated copy.
    /// Returns false when no record with that id exists.
    pub fn replace(&mut self, student: Student) -> bool {
        match self.students.iter_mut().find(|s| s.id == student.id) {
            Some(slot) => {
                *slot = student;
                true
            }
            None => false,
        }
    }

    /// Remove the record whose id matches.
    /// Returns false when no record with that id exists.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        self.students.len() < before
    }
}
