use shared::CreateAlumniRequest;

use crate::error::{AlumniError, MISSING_FIELDS_MESSAGE};

/// A validated alumni submission that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlumni {
    pub name: String,
    pub email: String,
    pub graduation_year: i64,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub linkedin: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<CreateAlumniRequest> for NewAlumni {
    type Error = AlumniError;

    /// Presence checks only. Empty text and a zero year count as missing;
    /// whitespace is kept as given.
    fn try_from(request: CreateAlumniRequest) -> Result<Self, Self::Error> {
        let name = present(request.name);
        let email = present(request.email);
        let graduation_year = request.graduation_year.filter(|year| *year != 0);

        match (name, email, graduation_year) {
            (Some(name), Some(email), Some(graduation_year)) => Ok(Self {
                name,
                email,
                graduation_year,
                job_title: present(request.job_title),
                company: present(request.company),
                linkedin: present(request.linkedin),
                phone: present(request.phone),
                address: present(request.address),
            }),
            _ => Err(AlumniError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
