use serde::{Deserialize, Serialize};

/// Top-level body returned by the API: `{ "results": [RawUser, ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<RawUser>,
}

/// Name section of a raw user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

/// Date-of-birth section. The API also sends the full date string; only the
/// precomputed age is consumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dob {
    pub age: u32,
}

/// Street subsection of the location. `number` arrives as a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
}

/// Raw user record as received from the API (one element of `results`).
///
/// All fields the flattening needs are declared required, so a record with a
/// missing nested field fails to decode instead of producing a half-built
/// `FlatUser`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub dob: Dob,
    pub phone: String,
    pub picture: Picture,
    pub nat: String,
}

/// Flat user record used by this crate (one row = one user).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatUser {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub age: u32,
    pub gender: String,
    pub country: String,
    pub city: String,
    pub street: String,
    pub phone: String,
    pub profile_picture: String,
    pub nationality: String,
}

impl FlatUser {
    /// Column names in canonical order, used for the CSV header and the
    /// dataset-info block.
    pub const FIELD_NAMES: [&'static str; 12] = [
        "first_name",
        "last_name",
        "full_name",
        "email",
        "age",
        "gender",
        "country",
        "city",
        "street",
        "phone",
        "profile_picture",
        "nationality",
    ];
}

impl From<RawUser> for FlatUser {
    fn from(u: RawUser) -> Self {
        let full_name = format!("{} {}", u.name.first, u.name.last);
        let street = format!("{} {}", u.location.street.number, u.location.street.name);
        Self {
            first_name: u.name.first,
            last_name: u.name.last,
            full_name,
            email: u.email,
            age: u.dob.age,
            gender: u.gender,
            country: u.location.country,
            city: u.location.city,
            street,
            phone: u.phone,
            profile_picture: u.picture.large,
            nationality: u.nat,
        }
    }
}
