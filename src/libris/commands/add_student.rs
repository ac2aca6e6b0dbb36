use super::helpers;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::Student;
use crate::store::DataStore;

/// Register a student. The usn is the natural key and uniqueness is
/// enforced here, at creation time, by scanning the store first.
pub fn run<S: DataStore>(store: &mut S, usn: String, name: String) -> Result<CmdResult> {
    if helpers::student_exists(store, &usn)? {
        return Err(LibrisError::StudentExists(usn));
    }

    let student = Student::new(usn, name);
    store.add_student(&student)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student created: {} ({})",
        student.name, student.usn
    )));
    result.students.push(student);
    Ok(result)
}
