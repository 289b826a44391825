use tracing::debug;

use super::StudentService;
use crate::errors::{Result, StudentModelError};
use crate::models::students::{Student, StudentPayload};

#[derive(Debug, Clone, PartialEq)]
pub struct InspectedStudent {
    pub student: Student,
    pub present_fields: Vec<&'static str>,
    pub normalized: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub students: Vec<InspectedStudent>,
}

pub fn inspect_payload(service: &StudentService, input: &str) -> Result<InspectReport> {
    let input = input.trim();
    if input.is_empty() {
        return Err(StudentModelError::empty_payload("No student payload provided"));
    }

    let students = StudentPayload::from_json(input)?.into_students();
    debug!("Decoded {} student(s) from payload", students.len());

    let mut inspected = Vec::with_capacity(students.len());
    for (index, student) in students.into_iter().enumerate() {
        let normalized = if service.pretty {
            student.to_json_pretty()?
        } else {
            student.to_json()?
        };
        let present_fields = present_fields(&student);
        debug!(index, fields = ?present_fields, "Inspected {}", student);

        inspected.push(InspectedStudent {
            student,
            present_fields,
            normalized,
        });
    }

    Ok(InspectReport {
        students: inspected,
    })
}

fn present_fields(student: &Student) -> Vec<&'static str> {
    let [id, first_name, last_name, age] = Student::FIELDS;
    let mut fields = Vec::new();
    if student.id.is_some() {
        fields.push(id);
    }
    if student.first_name.is_some() {
        fields.push(first_name);
    }
    if student.last_name.is_some() {
        fields.push(last_name);
    }
    if student.age.is_some() {
        fields.push(age);
    }
    fields
}
